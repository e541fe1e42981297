//! Unified error types for the user console.

use thiserror::Error;

/// Unified error type for the application.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Remote API call error.
    #[error("api error: {0}")]
    Api(#[from] ApiError),
}

/// Errors from calls to the user directory API.
///
/// The controller treats all of these uniformly ("remote call failed");
/// the variants exist so the diagnostic log line can say what actually
/// went wrong.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport-level failure (connect, timeout, TLS).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("{endpoint} returned HTTP {status}")]
    Status {
        /// Endpoint path that failed.
        endpoint: String,
        /// HTTP status code.
        status: u16,
    },

    /// Response body did not match the expected shape.
    #[error("failed to parse response: {0}")]
    Parse(String),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;
