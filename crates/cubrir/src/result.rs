//! Result and error types for Cubrir.

use thiserror::Error;

/// Result type for Cubrir operations
pub type CubrirResult<T> = Result<T, CubrirError>;

/// Errors that can occur in Cubrir
///
/// Every variant is a startup failure from the harness's point of view:
/// none of them is recovered locally, a broken coverage setup aborts the
/// run instead of silently producing an incomplete report.
#[derive(Debug, Error)]
pub enum CubrirError {
    /// A coverage session is already active on this collector
    #[error("Coverage session already active: {name}")]
    SessionActive {
        /// Name of the session that is already running
        name: String,
    },

    /// No coverage session is active
    #[error("No coverage session active")]
    NoSession,

    /// An exclusion filter pattern is not usable
    #[error("Invalid exclusion filter: {reason}")]
    InvalidFilter {
        /// Why the pattern was rejected
        reason: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
