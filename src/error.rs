//! Error type shared by the REST services and workflows.
//!
//! ERROR HANDLING
//! ==============
//! Failures from the authority are passed through untouched: a rejected login
//! and a crashed server both arrive as `Status` carrying whatever the server
//! said. Nothing here retries, logs, or reinterprets a status code.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use reqwest::StatusCode;
use reqwest::header::InvalidHeaderValue;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server responded {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("invalid authorization header: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),
    #[error("invalid {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
    #[error("no active session")]
    MissingSession,
}

impl ApiError {
    /// HTTP status of the failed exchange, when the server answered at all.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(error) => error.status(),
            Self::InvalidHeader(_) | Self::Invalid { .. } | Self::MissingSession => None,
        }
    }
}
