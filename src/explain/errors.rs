//! # Explain Errors
//!
//! The five-way error taxonomy surfaced by the explain endpoint. Every
//! variant is terminal for its request; none triggers a retry.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::provider::ProviderError;

/// Result type for explain operations
pub type ExplainResult<T> = Result<T, ExplainError>;

/// Errors surfaced by the explain service
#[derive(Debug, Error)]
pub enum ExplainError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Submitted code was missing, empty, or whitespace-only
    #[error("Code is required")]
    MissingCode,

    /// Upstream account has insufficient balance
    #[error("Insufficient Balance. Please check your account balance.")]
    InsufficientBalance,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// No provider API key was configured at startup
    #[error("API key not configured")]
    NotConfigured,

    /// Upstream call failed (malformed response, transport, or API error)
    #[error("Failed to explain code: {0}")]
    Upstream(String),
}

impl ExplainError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ExplainError::MissingCode => StatusCode::BAD_REQUEST,
            ExplainError::InsufficientBalance => StatusCode::PAYMENT_REQUIRED,
            ExplainError::NotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
            ExplainError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ProviderError> for ExplainError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::PaymentRequired => ExplainError::InsufficientBalance,
            other => ExplainError::Upstream(other.to_string()),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&ExplainError> for ErrorResponse {
    fn from(err: &ExplainError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ExplainError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}
