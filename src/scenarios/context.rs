//! Shared scenario context
//!
//! Everything a scenario needs to talk to the API, passed in explicitly.

use anyhow::Result;
use serde_json::Value;

use super::StepError;
use crate::auth::AuthHelper;
use crate::config::AppConfig;
use crate::http::{HttpClient, HttpRequest};
use crate::models::Role;

#[derive(Clone, Debug)]
pub struct ScenarioContext {
    pub client: HttpClient,
    pub auth: AuthHelper,
    api_prefix: String,
    health_path: String,
}

impl ScenarioContext {
    #[cfg(test)]
    pub fn new(client: HttpClient, auth: AuthHelper) -> Self {
        Self {
            client,
            auth,
            api_prefix: "/api".to_string(),
            health_path: "/health".to_string(),
        }
    }

    /// Build the context described by `config`
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let client = HttpClient::with_timeout(config.timeout_secs)?.base_url(&config.base_url);
        let auth = AuthHelper::new(client.clone(), config.users.clone())
            .api_prefix(&config.api_prefix);

        Ok(Self {
            client,
            auth,
            api_prefix: config.api_prefix.clone(),
            health_path: config.readiness.health_path.clone(),
        })
    }

    /// Path of an API resource, e.g. `api("/loads")`
    pub fn api(&self, path: &str) -> String {
        format!("{}{}", self.api_prefix.trim_end_matches('/'), path)
    }

    pub fn health_path(&self) -> &str {
        &self.health_path
    }

    /// Log in as a role another step depends on
    pub async fn login(&self, role: Role) -> Result<String, StepError> {
        self.auth
            .token(role)
            .await
            .ok_or(StepError::Unauthenticated(role))
    }

    /// Send a request and require `expected` status and a JSON body.
    ///
    /// `context` prefixes the failure message, e.g. "Failed to create load".
    pub async fn expect_json(
        &self,
        request: HttpRequest,
        expected: u16,
        context: &str,
    ) -> Result<Value, StepError> {
        let response = self.client.send(request).await?;
        if response.status_code != expected {
            return Err(StepError::unexpected_status(context, response.status_code));
        }
        Ok(response.json()?)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use mockito::{Matcher, Mock, ServerGuard};
    use serde_json::json;
    use std::io::Write;

    use crate::models::RoleProfiles;

    pub fn context(url: &str) -> ScenarioContext {
        context_with_timeout(url, 2)
    }

    pub fn context_with_timeout(url: &str, timeout_secs: u64) -> ScenarioContext {
        let client = HttpClient::with_timeout(timeout_secs).unwrap().base_url(url);
        let auth = AuthHelper::new(client.clone(), RoleProfiles::default());
        ScenarioContext::new(client, auth)
    }

    /// Mock `method path` answering 200 only after `delay`
    pub async fn mock_stalled(
        server: &mut ServerGuard,
        method: &str,
        path: &str,
        delay: std::time::Duration,
    ) -> Mock {
        server
            .mock(method, path)
            .with_status(200)
            .with_chunked_body(move |w| {
                std::thread::sleep(delay);
                w.write_all(b"{}")
            })
            .create_async()
            .await
    }

    /// Mock a successful login for `role` returning `token`
    pub async fn mock_login(server: &mut ServerGuard, role: Role, token: &str) -> Mock {
        let profiles = RoleProfiles::default();
        server
            .mock("POST", "/api/auth/login")
            .match_body(Matcher::PartialJson(
                json!({"email": profiles.get(role).email}),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"token": token}).to_string())
            .create_async()
            .await
    }

    /// Mock a rejected login for `role`
    pub async fn mock_login_rejected(server: &mut ServerGuard, role: Role) -> Mock {
        let profiles = RoleProfiles::default();
        server
            .mock("POST", "/api/auth/login")
            .match_body(Matcher::PartialJson(
                json!({"email": profiles.get(role).email}),
            ))
            .with_status(401)
            .with_body(r#"{"error":"Invalid credentials"}"#)
            .create_async()
            .await
    }
}
