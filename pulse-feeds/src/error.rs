//! Error types for source clients

use thiserror::Error;

/// Errors that can occur while fetching or parsing a source
///
/// These never cross the fan-out boundary: the pipeline converts any
/// per-source failure into an empty contribution.
#[derive(Debug, Error)]
pub enum FeedError {
    /// HTTP request failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Upstream returned a non-success status
    #[error("Upstream error (status {status}): {message}")]
    Upstream {
        /// HTTP status code
        status: u16,
        /// Context for the failing endpoint
        message: String,
    },

    /// Failed to parse the upstream payload
    #[error("Parse error: {0}")]
    ParseError(String),
}
