//! Role login
//!
//! Exchanges a role's static credentials for a bearer token.

use serde_json::json;
use tracing::{debug, warn};

use crate::http::{HttpClient, HttpRequest};
use crate::models::{Role, RoleProfiles};

/// Resolves roles to bearer tokens via the login endpoint.
///
/// Tokens are never cached; every call performs a fresh login.
#[derive(Clone, Debug)]
pub struct AuthHelper {
    client: HttpClient,
    profiles: RoleProfiles,
    api_prefix: String,
}

impl AuthHelper {
    pub fn new(client: HttpClient, profiles: RoleProfiles) -> Self {
        Self {
            client,
            profiles,
            api_prefix: "/api".to_string(),
        }
    }

    pub fn api_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.api_prefix = prefix.into();
        self
    }

    fn login_path(&self) -> String {
        format!("{}/auth/login", self.api_prefix.trim_end_matches('/'))
    }

    /// Log in as `role` and return its token.
    ///
    /// Returns `None` on any failure: non-200 status, missing `token` field,
    /// unparseable body or network error.
    pub async fn token(&self, role: Role) -> Option<String> {
        let profile = self.profiles.get(role);
        let request = HttpRequest::post(self.login_path()).json(&json!({
            "email": profile.email,
            "password": profile.password,
        }));

        let response = match self.client.send(request).await {
            Ok(resp) => resp,
            Err(e) => {
                warn!("{} login failed: {}", role, e);
                return None;
            }
        };

        if response.status_code != 200 {
            warn!("{} login rejected with status {}", role, response.status_code);
            return None;
        }

        let token = response
            .json()
            .ok()
            .and_then(|body| body.get("token").and_then(|t| t.as_str()).map(String::from));

        match &token {
            Some(_) => debug!("{} login succeeded", role),
            None => warn!("{} login response carried no token", role),
        }

        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn helper(url: &str) -> AuthHelper {
        let client = HttpClient::with_timeout(2).unwrap().base_url(url);
        AuthHelper::new(client, RoleProfiles::default())
    }

    #[tokio::test]
    async fn test_token_on_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/auth/login")
            .match_body(Matcher::Json(json!({
                "email": "client1@example.com",
                "password": "Client123!",
            })))
            .with_status(200)
            .with_body(r#"{"token":"T","user":{"email":"client1@example.com"}}"#)
            .create_async()
            .await;

        let token = helper(&server.url()).token(Role::Client).await;
        mock.assert_async().await;
        assert_eq!(token.as_deref(), Some("T"));
    }

    #[tokio::test]
    async fn test_no_token_on_unauthorized() {
        for status in [401, 403] {
            let mut server = Server::new_async().await;
            let _m = server
                .mock("POST", "/api/auth/login")
                .with_status(status)
                .with_body(r#"{"error":"Invalid credentials"}"#)
                .create_async()
                .await;

            assert_eq!(helper(&server.url()).token(Role::Admin).await, None);
        }
    }

    #[tokio::test]
    async fn test_no_token_when_field_missing() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/api/auth/login")
            .with_status(200)
            .with_body(r#"{"message":"ok"}"#)
            .create_async()
            .await;

        assert_eq!(helper(&server.url()).token(Role::Transporter).await, None);
    }

    #[tokio::test]
    async fn test_no_token_on_connection_error() {
        assert_eq!(helper("http://127.0.0.1:1").token(Role::Client).await, None);
    }

    #[tokio::test]
    async fn test_custom_api_prefix() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v2/auth/login")
            .with_status(200)
            .with_body(r#"{"token":"X"}"#)
            .create_async()
            .await;

        let token = helper(&server.url())
            .api_prefix("/v2/")
            .token(Role::Admin)
            .await;
        mock.assert_async().await;
        assert_eq!(token.as_deref(), Some("X"));
    }
}
