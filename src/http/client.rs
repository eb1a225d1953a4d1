//! HTTP client for API testing
//!
//! Provides a small request/response layer over reqwest with a base URL,
//! a bounded per-request timeout and bearer-auth helpers.

use anyhow::{Context, Result};
use reqwest::{Client, Method};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// HTTP client errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout after {0} seconds")]
    Timeout(u64),

    #[error("Connection refused to {0}")]
    ConnectionRefused(String),

    #[error("Invalid response body: {0}")]
    InvalidBody(String),
}

/// HTTP client for testing
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
    base_url: Option<String>,
    timeout_secs: u64,
}

impl HttpClient {
    /// Create client with custom timeout
    pub fn with_timeout(timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: None,
            timeout_secs,
        })
    }

    /// Set base URL for requests
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Build full URL
    fn build_url(&self, path: &str) -> String {
        match &self.base_url {
            Some(base) => {
                if path.starts_with("http://") || path.starts_with("https://") {
                    path.to_string()
                } else {
                    format!("{}{}", base.trim_end_matches('/'), path)
                }
            }
            None => path.to_string(),
        }
    }

    fn classify(&self, err: reqwest::Error, url: &str) -> HttpError {
        if err.is_timeout() {
            HttpError::Timeout(self.timeout_secs)
        } else if err.is_connect() {
            HttpError::ConnectionRefused(url.to_string())
        } else {
            HttpError::RequestFailed(err.to_string())
        }
    }

    /// Send HTTP request
    pub async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let url = self.build_url(&request.url);
        debug!("Sending {} request to {}", request.method, url);

        let mut req_builder = self.client.request(request.method.clone(), &url);

        for (key, value) in &request.headers {
            req_builder = req_builder.header(key.as_str(), value.as_str());
        }

        if let Some(body) = request.body {
            req_builder = req_builder.body(body);
        }

        let start = Instant::now();

        let response = req_builder
            .send()
            .await
            .map_err(|e| self.classify(e, &url))?;

        let status = response.status();

        let mut headers = HashMap::new();
        for (key, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                headers.insert(key.to_string(), v.to_string());
            }
        }

        let body = response.text().await.map_err(|e| self.classify(e, &url))?;
        let duration_ms = start.elapsed().as_millis() as u64;

        debug!(
            "Response: {} {} in {}ms",
            status.as_u16(),
            status.canonical_reason().unwrap_or(""),
            duration_ms
        );

        Ok(HttpResponse {
            status_code: status.as_u16(),
            headers,
            body,
            duration_ms,
        })
    }

    /// Convenience method for GET request
    pub async fn get(&self, url: &str) -> Result<HttpResponse, HttpError> {
        self.send(HttpRequest::get(url)).await
    }
}

/// HTTP request builder
#[derive(Clone, Debug)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    pub fn put(url: impl Into<String>) -> Self {
        Self::new(Method::PUT, url)
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Attach a bearer token
    pub fn bearer(self, token: &str) -> Self {
        self.header("Authorization", format!("Bearer {token}"))
    }

    /// Attach a JSON body
    pub fn json(mut self, body: &Value) -> Self {
        self.body = Some(body.to_string());
        self.header("Content-Type", "application/json")
    }
}

/// HTTP response
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HttpResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub duration_ms: u64,
}

impl HttpResponse {
    /// Parse the body as JSON
    pub fn json(&self) -> Result<Value, HttpError> {
        serde_json::from_str(&self.body).map_err(|e| HttpError::InvalidBody(e.to_string()))
    }
}
