//! Readiness polling
//!
//! Waits for the server's liveness endpoint before any scenario runs.

use anyhow::Result;
use std::time::{Duration, Instant};
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::config::ReadinessConfig;
use crate::http::HttpClient;

/// Result of a readiness wait
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadinessReport {
    pub ready: bool,
    /// Attempts made, including the successful one
    pub attempts: u32,
    pub elapsed: Duration,
}

/// Polls a liveness endpoint with a fixed delay between attempts
pub struct ReadinessPoller {
    client: HttpClient,
    health_path: String,
    max_attempts: u32,
    delay: Duration,
}

impl ReadinessPoller {
    /// Create a poller against `base_url`
    pub fn new(base_url: &str, config: &ReadinessConfig) -> Result<Self> {
        let client = HttpClient::with_timeout(config.probe_timeout_secs)?.base_url(base_url);
        Ok(Self {
            client,
            health_path: config.health_path.clone(),
            max_attempts: config.max_attempts.max(1),
            delay: config.delay(),
        })
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    #[cfg(test)]
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Probe once; only a 200 counts as ready
    async fn probe(&self) -> bool {
        match self.client.get(&self.health_path).await {
            Ok(resp) => {
                debug!("Liveness probe returned {}", resp.status_code);
                resp.status_code == 200
            }
            Err(e) => {
                debug!("Liveness probe failed: {}", e);
                false
            }
        }
    }

    /// Wait until the server answers 200 or the attempts run out.
    ///
    /// No delay follows the final attempt.
    pub async fn wait(&self) -> ReadinessReport {
        info!("Waiting for server to start...");
        let start = Instant::now();

        for attempt in 1..=self.max_attempts {
            if self.probe().await {
                info!("Server is ready after {} attempt(s)", attempt);
                return ReadinessReport {
                    ready: true,
                    attempts: attempt,
                    elapsed: start.elapsed(),
                };
            }

            info!(
                "Attempt {}/{} - Server not ready yet...",
                attempt, self.max_attempts
            );

            if attempt < self.max_attempts {
                sleep(self.delay).await;
            }
        }

        warn!(
            "Server failed to start within {} attempts ({:.1}s)",
            self.max_attempts,
            start.elapsed().as_secs_f64()
        );

        ReadinessReport {
            ready: false,
            attempts: self.max_attempts,
            elapsed: start.elapsed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn config() -> ReadinessConfig {
        ReadinessConfig {
            probe_timeout_secs: 2,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_ready_on_first_attempt() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/health")
            .with_status(200)
            .with_body(r#"{"status":"OK"}"#)
            .expect(1)
            .create_async()
            .await;

        let poller = ReadinessPoller::new(&server.url(), &config())
            .unwrap()
            .delay(Duration::from_secs(5));
        let report = poller.wait().await;

        mock.assert_async().await;
        assert!(report.ready);
        assert_eq!(report.attempts, 1);
        assert!(report.elapsed < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_gives_up_after_max_attempts() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/health")
            .with_status(503)
            .expect(3)
            .create_async()
            .await;

        let delay = Duration::from_millis(100);
        let poller = ReadinessPoller::new(&server.url(), &config())
            .unwrap()
            .max_attempts(3)
            .delay(delay);
        let report = poller.wait().await;

        mock.assert_async().await;
        assert!(!report.ready);
        assert_eq!(report.attempts, 3);
        assert!(report.elapsed >= delay * 2);
        assert!(report.elapsed < delay * 3 + Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_connection_errors_are_retried() {
        let poller = ReadinessPoller::new("http://127.0.0.1:1", &config())
            .unwrap()
            .max_attempts(2)
            .delay(Duration::from_millis(10));
        let report = poller.wait().await;

        assert!(!report.ready);
        assert_eq!(report.attempts, 2);
    }

    #[tokio::test]
    async fn test_non_200_success_is_not_ready() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/health")
            .with_status(204)
            .create_async()
            .await;

        let poller = ReadinessPoller::new(&server.url(), &config())
            .unwrap()
            .max_attempts(1);
        assert!(!poller.wait().await.ready);
    }
}
