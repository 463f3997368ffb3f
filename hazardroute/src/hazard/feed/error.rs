//! Hazard feed error types.

use thiserror::Error;

/// Errors that can occur while retrieving hazard events.
///
/// Any of these aborts the assessment cycle; events are never defaulted or
/// partially used.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeedError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(String),

    /// Server answered with a non-success status
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// Response body is not valid GeoJSON for this feed
    #[error("Invalid feed JSON: {0}")]
    Json(String),

    /// A feature is structurally valid JSON but unusable
    #[error("Invalid feature #{index}: {message}")]
    InvalidFeature { index: usize, message: String },

    /// Reading a saved feed file failed
    #[error("Failed to read feed file: {0}")]
    Io(String),
}
