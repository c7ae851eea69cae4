/// Error types for the backend module
use thiserror::Error;

/// Errors that can occur while talking to the hosted backend
#[derive(Debug, Error)]
pub enum BackendError {
    /// Network-related errors
    #[error("Network error: {0}")]
    Network(String),

    /// Missing or malformed configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// The backend rejected the request
    #[error("Backend error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code returned by the backend
        status: u16,
        /// Response body, as returned
        message: String,
    },

    /// The backend answered with a body we could not parse
    #[error("Invalid response from backend: {0}")]
    InvalidResponse(String),
}
