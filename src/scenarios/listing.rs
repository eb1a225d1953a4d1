//! Scenarios 8-9: authenticated list retrieval
//!
//! Template for "log in as a role, GET a collection, count it".

use tracing::info;

use super::{shape, ScenarioContext, StepError};
use crate::http::HttpRequest;
use crate::models::Role;

#[derive(Clone, Debug)]
pub struct ListingScenario {
    pub role: Role,
    /// Collection name: both the path segment and the body key
    pub resource: &'static str,
}

impl ListingScenario {
    pub fn new(role: Role, resource: &'static str) -> Self {
        Self { role, resource }
    }

    pub fn documents() -> Self {
        Self::new(Role::Transporter, "documents")
    }

    pub fn messages() -> Self {
        Self::new(Role::Client, "messages")
    }

    pub async fn run(&self, ctx: &ScenarioContext) -> Result<String, StepError> {
        info!("Running {} listing as {}", self.resource, self.role);
        let token = ctx.login(self.role).await?;

        let body = ctx
            .expect_json(
                HttpRequest::get(ctx.api(&format!("/{}", self.resource))).bearer(&token),
                200,
                &format!("Failed to retrieve {}", self.resource),
            )
            .await?;
        let count = shape::list(&body, self.resource, self.resource)?.len();

        Ok(format!("Retrieved {count} {}", self.resource))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenarios::context::test_support::{context, mock_login, mock_login_rejected};
    use mockito::Server;

    #[tokio::test]
    async fn test_documents() {
        let mut server = Server::new_async().await;
        let _login = mock_login(&mut server, Role::Transporter, "T").await;
        let _docs = server
            .mock("GET", "/api/documents")
            .match_header("authorization", "Bearer T")
            .with_status(200)
            .with_body(r#"{"documents":[{"id":"d1"},{"id":"d2"}]}"#)
            .create_async()
            .await;

        let message = ListingScenario::documents()
            .run(&context(&server.url()))
            .await
            .unwrap();
        assert_eq!(message, "Retrieved 2 documents");
    }

    #[tokio::test]
    async fn test_messages_empty() {
        let mut server = Server::new_async().await;
        let _login = mock_login(&mut server, Role::Client, "C").await;
        let _msgs = server
            .mock("GET", "/api/messages")
            .with_status(200)
            .with_body(r#"{"messages":[]}"#)
            .create_async()
            .await;

        let message = ListingScenario::messages()
            .run(&context(&server.url()))
            .await
            .unwrap();
        assert_eq!(message, "Retrieved 0 messages");
    }

    #[tokio::test]
    async fn test_retrieval_failure() {
        let mut server = Server::new_async().await;
        let _login = mock_login(&mut server, Role::Client, "C").await;
        let _msgs = server
            .mock("GET", "/api/messages")
            .with_status(500)
            .create_async()
            .await;

        let err = ListingScenario::messages()
            .run(&context(&server.url()))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to retrieve messages: 500");
    }

    #[tokio::test]
    async fn test_missing_collection_key() {
        let mut server = Server::new_async().await;
        let _login = mock_login(&mut server, Role::Transporter, "T").await;
        let _docs = server
            .mock("GET", "/api/documents")
            .with_status(200)
            .with_body(r#"{"items":[]}"#)
            .create_async()
            .await;

        let err = ListingScenario::documents()
            .run(&context(&server.url()))
            .await
            .unwrap_err();
        assert_eq!(err, StepError::missing_field("documents", "documents"));
    }

    #[tokio::test]
    async fn test_login_failure() {
        let mut server = Server::new_async().await;
        let _login = mock_login_rejected(&mut server, Role::Transporter).await;

        let err = ListingScenario::documents()
            .run(&context(&server.url()))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Transporter authentication failed");
    }
}
