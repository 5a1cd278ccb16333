//! Error types for parsing model identifiers.

use thiserror::Error;

/// Errors produced when a CMS identifier does not map onto the model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The model name or uid is not a tracked content type.
    #[error("untracked content type: {0}")]
    UnknownContentType(String),

    /// The webhook event name is not a lifecycle event.
    #[error("unknown lifecycle event: {0}")]
    UnknownEvent(String),
}
