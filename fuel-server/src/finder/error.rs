//! Fuel finder error types.

/// Errors from fetching the fuel finder results page.
#[derive(Debug, thiserror::Error)]
pub enum FinderError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Fuel finder answered with something other than 200 OK
    #[error("fuel finder returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// Mock fixture directory could not be loaded
    #[error("fixture error: {message}")]
    Fixture { message: String },
}
