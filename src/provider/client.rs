//! Completion client implementations
//!
//! [`CompletionClient`] is the seam between the explain service and the
//! outside world: one HTTP implementation for production, one mock with a
//! request log for tests.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::config::ProviderConfig;

use super::errors::{ProviderError, ProviderResult};
use super::types::{ChatMessage, CompletionRequest, CompletionResponse, Role};

/// Path of the chat-completions endpoint relative to the base URL
const COMPLETIONS_PATH: &str = "/chat/completions";

/// Cap on upstream error bodies quoted into error messages
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Client for a single non-streaming completion exchange
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Submit one completion request and return the first choice's text.
    ///
    /// A response without usable content is `ProviderError::InvalidResponse`.
    async fn complete(&self, messages: Vec<ChatMessage>) -> ProviderResult<String>;
}

/// HTTP client for an OpenAI-compatible chat-completions API
pub struct HttpCompletionClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl HttpCompletionClient {
    /// Build a client from configuration; `None` when no API key is set
    pub fn from_config(config: &ProviderConfig) -> Option<Self> {
        let api_key = config.api_key.clone()?;
        Some(Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn complete(&self, messages: Vec<ChatMessage>) -> ProviderResult<String> {
        let request = CompletionRequest::new(self.model.clone(), messages);

        let response = self
            .http
            .post(format!("{}{}", self.base_url, COMPLETIONS_PATH))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::PAYMENT_REQUIRED {
            return Err(ProviderError::PaymentRequired);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
            return Err(ProviderError::Api(format!(
                "upstream returned {}: {}",
                status, body
            )));
        }

        let completion: CompletionResponse = response.json().await?;
        completion
            .first_content()
            .map(str::to_owned)
            .ok_or(ProviderError::InvalidResponse)
    }
}

/// Create a shared completion client when the provider is configured
pub fn create_completion_client(config: &ProviderConfig) -> Option<Arc<dyn CompletionClient>> {
    HttpCompletionClient::from_config(config)
        .map(|client| Arc::new(client) as Arc<dyn CompletionClient>)
}

/// Failure the mock client should simulate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockFailure {
    /// Upstream signalled insufficient balance
    PaymentRequired,
    /// Completion without usable content
    InvalidResponse,
    /// Generic upstream failure
    Upstream,
}

/// Mock completion client for testing
///
/// Records every request so tests can assert on the messages sent upstream.
pub struct MockCompletionClient {
    reply: Result<String, MockFailure>,
    requests: RwLock<Vec<Vec<ChatMessage>>>,
}

impl MockCompletionClient {
    /// Mock that answers every request with the given text
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Ok(text.into()),
            requests: RwLock::new(Vec::new()),
        }
    }

    /// Mock that fails every request with the given failure
    pub fn failing(failure: MockFailure) -> Self {
        Self {
            reply: Err(failure),
            requests: RwLock::new(Vec::new()),
        }
    }

    /// Number of requests received
    pub fn request_count(&self) -> usize {
        self.requests.read().unwrap().len()
    }

    /// Messages of the most recent request
    pub fn last_request(&self) -> Option<Vec<ChatMessage>> {
        self.requests.read().unwrap().last().cloned()
    }

    /// System message content of the most recent request
    pub fn last_system_prompt(&self) -> Option<String> {
        self.last_request()?
            .iter()
            .find(|message| message.role == Role::System)
            .map(|message| message.content.clone())
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(&self, messages: Vec<ChatMessage>) -> ProviderResult<String> {
        self.requests.write().unwrap().push(messages);

        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(MockFailure::PaymentRequired) => Err(ProviderError::PaymentRequired),
            Err(MockFailure::InvalidResponse) => Err(ProviderError::InvalidResponse),
            Err(MockFailure::Upstream) => {
                Err(ProviderError::Api("upstream returned 503: mock".to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_absent_without_key() {
        let config = ProviderConfig::new(None);
        assert!(create_completion_client(&config).is_none());
    }

    #[test]
    fn test_client_present_with_key() {
        let config = ProviderConfig::new(Some("sk-test".to_string()));
        assert!(create_completion_client(&config).is_some());
    }

    #[tokio::test]
    async fn test_mock_records_requests() {
        let mock = MockCompletionClient::replying("ok");

        let result = mock
            .complete(vec![
                ChatMessage::system("explain"),
                ChatMessage::user("fn main() {}"),
            ])
            .await
            .unwrap();

        assert_eq!(result, "ok");
        assert_eq!(mock.request_count(), 1);
        assert_eq!(mock.last_system_prompt().unwrap(), "explain");

        let last = mock.last_request().unwrap();
        assert_eq!(last[1].role, Role::User);
        assert_eq!(last[1].content, "fn main() {}");
    }

    #[tokio::test]
    async fn test_mock_failures() {
        let mock = MockCompletionClient::failing(MockFailure::PaymentRequired);
        let err = mock.complete(vec![]).await.unwrap_err();
        assert!(matches!(err, ProviderError::PaymentRequired));

        let mock = MockCompletionClient::failing(MockFailure::InvalidResponse);
        let err = mock.complete(vec![]).await.unwrap_err();
        assert!(matches!(err, ProviderError::InvalidResponse));
    }
}
