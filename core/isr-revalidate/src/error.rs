//! Error types for the revalidation layer.

use thiserror::Error;

/// Result type for revalidation operations.
pub type RevalidateResult<T> = Result<T, RevalidateError>;

/// Errors raised inside the library.
///
/// None of these reach the CMS: the dispatcher turns them into log lines and a
/// [`DeliveryOutcome`](crate::DeliveryOutcome).
#[derive(Debug, Error)]
pub enum RevalidateError {
    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Transport-level HTTP failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote answered with a non-success status.
    #[error("request rejected: {status} - {body}")]
    Status { status: u16, body: String },

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The locale provider could not produce a locale list.
    #[error("locale lookup failed: {0}")]
    Locale(String),
}

impl RevalidateError {
    /// Returns the HTTP status if the remote rejected the request.
    pub fn status(&self) -> Option<u16> {
        match self {
            RevalidateError::Status { status, .. } => Some(*status),
            RevalidateError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
