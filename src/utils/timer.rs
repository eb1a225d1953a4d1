//! Timing helpers for scenario steps

use std::future::Future;
use std::time::Instant;

/// Await `fut`, returning its output and the wall time it took in ms.
///
/// The duration is logged at debug level under `label`.
pub async fn timed<F: Future>(label: &str, fut: F) -> (F::Output, u64) {
    let start = Instant::now();
    let output = fut.await;
    let elapsed_ms = start.elapsed().as_millis() as u64;
    tracing::debug!("{} took {}ms", label, elapsed_ms);
    (output, elapsed_ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_timed_measures_the_future() {
        let (value, ms) = timed("sleep", async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            7
        })
        .await;
        assert_eq!(value, 7);
        assert!(ms >= 20);
    }

    #[tokio::test]
    async fn test_timed_ready_future() {
        let (value, ms) = timed("ready", async { "done" }).await;
        assert_eq!(value, "done");
        assert!(ms < 1000);
    }
}
