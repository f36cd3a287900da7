//! Session provider error types.

use thiserror::Error;

/// Errors that can occur when talking to the platform backend.
///
/// A rejected credential is not an error; see
/// [`super::SessionProvider::login`].
#[derive(Debug, Error)]
pub enum ProviderError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with an unexpected status.
    #[error("platform API returned {status}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Truncated response body for diagnostics.
        body: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ProviderError::Api {
            status: 503,
            body: "maintenance".to_string(),
        };
        assert_eq!(err.to_string(), "platform API returned 503: maintenance");
    }
}
