//! Scenario step errors
//!
//! The `Display` text of a `StepError` is exactly the message recorded in
//! the failing outcome.

use thiserror::Error;

use crate::http::HttpError;
use crate::models::Role;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StepError {
    /// A required login produced no token
    #[error("{0} authentication failed")]
    Unauthenticated(Role),

    /// The login under test produced no token
    #[error("Login failed - no token received")]
    LoginFailed,

    #[error("Request error: {0}")]
    Http(#[from] HttpError),

    /// Liveness endpoint unreachable
    #[error("Connection error: {0}")]
    Connection(HttpError),

    #[error("{context}: {status}")]
    UnexpectedStatus { context: String, status: u16 },

    #[error("Invalid response from {step}: missing field '{field}'")]
    MissingField { step: String, field: String },

    #[error("No loads available for bidding")]
    NoLoadsAvailable,
}

impl StepError {
    pub fn unexpected_status(context: impl Into<String>, status: u16) -> Self {
        StepError::UnexpectedStatus {
            context: context.into(),
            status,
        }
    }

    pub fn missing_field(step: impl Into<String>, field: impl Into<String>) -> Self {
        StepError::MissingField {
            step: step.into(),
            field: field.into(),
        }
    }

    /// Observed HTTP status, when the failure was a status mismatch
    pub fn status_code(&self) -> Option<u16> {
        match self {
            StepError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            StepError::Unauthenticated(Role::Client).to_string(),
            "Client authentication failed"
        );
        assert_eq!(
            StepError::unexpected_status("Failed to create load", 500).to_string(),
            "Failed to create load: 500"
        );
        assert_eq!(
            StepError::Http(HttpError::Timeout(10)).to_string(),
            "Request error: Timeout after 10 seconds"
        );
        assert_eq!(
            StepError::missing_field("load creation", "load.id").to_string(),
            "Invalid response from load creation: missing field 'load.id'"
        );
    }

    #[test]
    fn test_status_code() {
        assert_eq!(
            StepError::unexpected_status("Profile access failed", 401).status_code(),
            Some(401)
        );
        assert_eq!(StepError::NoLoadsAvailable.status_code(), None);
    }
}
