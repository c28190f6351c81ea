//! Provider error types
//!
//! Typed variants for the distinct upstream failure kinds, produced at the
//! provider-calling boundary so callers never inspect ad hoc error fields.

use thiserror::Error;

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Errors produced by the completion-provider boundary
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Upstream rejected the request for lack of account balance (HTTP 402).
    ///
    /// Best-effort classification: only an unambiguous 402 status lands
    /// here; anything less certain falls through to `Api` or `Transport`.
    #[error("insufficient balance")]
    PaymentRequired,

    /// Completion arrived without usable text content
    #[error("Invalid response from API")]
    InvalidResponse,

    /// Upstream answered with a non-success status
    #[error("{0}")]
    Api(String),

    /// Request never completed (connect, TLS, body decode, ...)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_response_message() {
        // Relayed verbatim into the generic failure surface, so the text matters
        assert_eq!(
            ProviderError::InvalidResponse.to_string(),
            "Invalid response from API"
        );
    }

    #[test]
    fn test_api_error_carries_upstream_detail() {
        let err = ProviderError::Api("upstream returned 503: overloaded".to_string());
        assert!(err.to_string().contains("503"));
    }
}
