//! HTTP client module for API testing
//!
//! Provides HTTP client functionality for exercising the marketplace API.

mod client;

pub use client::{HttpClient, HttpError, HttpRequest, DEFAULT_TIMEOUT_SECS};
