//! Registration service client errors.

use thiserror::Error;

/// Failures raised by a [`RegistrationApi`](super::RegistrationApi)
/// implementation.
///
/// The orchestrator surfaces `Display` text of these directly in the
/// error flow state, so messages are written for the user, not the log.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("server returned status {0}")]
    Status(u16),

    /// Unclassified failure with nothing better to say.
    #[error("Unknown Error")]
    Unknown,
}
