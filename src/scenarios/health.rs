//! Scenario 1: Server Health

use tracing::info;

use super::{shape, ScenarioContext, StepError};
use crate::http::HttpRequest;

/// Checks the liveness endpoint and reports the advertised status
#[derive(Clone, Debug, Default)]
pub struct ServerHealthScenario;

impl ServerHealthScenario {
    pub async fn run(&self, ctx: &ScenarioContext) -> Result<String, StepError> {
        info!("Running Server Health scenario");

        let response = ctx
            .client
            .send(HttpRequest::get(ctx.health_path()))
            .await
            .map_err(StepError::Connection)?;

        if response.status_code != 200 {
            return Err(StepError::unexpected_status(
                "Status code",
                response.status_code,
            ));
        }

        let body = response.json().map_err(StepError::Connection)?;
        let status = body
            .get("status")
            .map(shape::text)
            .unwrap_or_else(|| "Unknown".to_string());

        Ok(format!("Status: {status}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenarios::context::test_support::context;
    use mockito::Server;

    #[tokio::test]
    async fn test_reports_status() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/health")
            .with_status(200)
            .with_body(r#"{"status":"OK","timestamp":"2025-01-01T00:00:00Z"}"#)
            .create_async()
            .await;

        let message = ServerHealthScenario
            .run(&context(&server.url()))
            .await
            .unwrap();
        assert_eq!(message, "Status: OK");
    }

    #[tokio::test]
    async fn test_missing_status_is_unknown() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/health")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let message = ServerHealthScenario
            .run(&context(&server.url()))
            .await
            .unwrap();
        assert_eq!(message, "Status: Unknown");
    }

    #[tokio::test]
    async fn test_non_json_body_is_connection_error() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/health")
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let err = ServerHealthScenario
            .run(&context(&server.url()))
            .await
            .unwrap_err();
        assert!(
            err.to_string().starts_with("Connection error: Invalid response body:"),
            "{err}"
        );
    }

    #[tokio::test]
    async fn test_bad_status_code() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/health")
            .with_status(500)
            .create_async()
            .await;

        let err = ServerHealthScenario
            .run(&context(&server.url()))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Status code: 500");
    }

    #[tokio::test]
    async fn test_unreachable() {
        let err = ServerHealthScenario
            .run(&context("http://127.0.0.1:1"))
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("Connection error:"));
    }
}
