//! Explain service
//!
//! The single core operation: configuration check, presence validation,
//! prompt selection, one completion exchange, error mapping. Stateless
//! beyond the shared read-only client handle.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::ProviderConfig;
use crate::observability::Logger;
use crate::provider::{create_completion_client, ChatMessage, CompletionClient, ProviderError};

use super::detail::DetailLevel;
use super::errors::{ExplainError, ExplainResult};

/// Request body for an explanation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExplainRequest {
    /// Source code to explain
    #[serde(default)]
    pub code: String,

    /// Requested verbosity; unrecognized or absent means medium
    #[serde(rename = "detailLevel", default)]
    pub detail_level: Option<String>,
}

impl ExplainRequest {
    /// Build a request for the given code and detail level
    pub fn new(code: impl Into<String>, detail_level: DetailLevel) -> Self {
        Self {
            code: code.into(),
            detail_level: Some(detail_level.as_str().to_string()),
        }
    }
}

/// Successful explanation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainResponse {
    pub explanation: String,
}

/// Stateless explanation service over a shared provider client
///
/// The client handle is built once at startup and immutable afterwards.
/// `None` means the provider was never configured; every call then fails
/// without touching the network.
pub struct ExplainService {
    client: Option<Arc<dyn CompletionClient>>,
}

impl ExplainService {
    /// Service over an already-built client
    pub fn with_client(client: Arc<dyn CompletionClient>) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// Service with no provider configured; every call fails closed
    pub fn unconfigured() -> Self {
        Self { client: None }
    }

    /// Build the service from provider configuration
    pub fn from_config(config: &ProviderConfig) -> Self {
        Self {
            client: create_completion_client(config),
        }
    }

    /// Whether a provider client is available
    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Run one explanation exchange
    ///
    /// Configuration is checked before input validation: an unconfigured
    /// service reports so regardless of what was submitted.
    pub async fn explain(&self, request: ExplainRequest) -> ExplainResult<ExplainResponse> {
        let client = self.client.as_ref().ok_or(ExplainError::NotConfigured)?;

        if request.code.trim().is_empty() {
            return Err(ExplainError::MissingCode);
        }

        let detail = request
            .detail_level
            .as_deref()
            .map(DetailLevel::parse)
            .unwrap_or_default();

        let request_id = Uuid::new_v4().to_string();
        Logger::info(
            "EXPLAIN_REQUEST",
            &[
                ("request_id", &request_id),
                ("detail", detail.as_str()),
                ("code_bytes", &request.code.len().to_string()),
            ],
        );

        let messages = vec![
            ChatMessage::system(detail.system_prompt()),
            ChatMessage::user(request.code),
        ];

        match client.complete(messages).await {
            Ok(explanation) => Ok(ExplainResponse { explanation }),
            Err(ProviderError::PaymentRequired) => {
                Err(ExplainError::from(ProviderError::PaymentRequired))
            }
            Err(err) => {
                Logger::error(
                    "UPSTREAM_FAILURE",
                    &[("request_id", &request_id), ("error", &err.to_string())],
                );
                Err(err.into())
            }
        }
    }
}
