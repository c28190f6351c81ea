//! Provider Configuration
//!
//! Process-wide configuration for the upstream completion provider.
//! Read once from the environment at startup and shared read-only
//! afterwards; a missing API key is a runtime condition reported per
//! request, not a startup failure.

/// Environment variable holding the provider API key.
pub const API_KEY_ENV: &str = "DEEPSEEK_API_KEY";

/// Environment variable overriding the provider base URL.
pub const BASE_URL_ENV: &str = "CODEXPLAIN_BASE_URL";

/// Environment variable overriding the model identifier.
pub const MODEL_ENV: &str = "CODEXPLAIN_MODEL";

/// Default provider base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com";

/// Default model identifier for completion requests.
pub const DEFAULT_MODEL: &str = "deepseek-chat";

/// Upstream completion provider configuration
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Provider API key; `None` when the environment variable is unset
    pub api_key: Option<String>,

    /// Provider base URL (default: api.deepseek.com)
    pub base_url: String,

    /// Fixed model identifier sent with every completion request
    pub model: String,
}

impl ProviderConfig {
    /// Create a config with explicit values and default base URL/model
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Load configuration from the process environment
    ///
    /// An empty API key value is treated the same as an unset one.
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty());

        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var(MODEL_ENV).unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Self {
            api_key,
            base_url,
            model,
        }
    }

    /// Whether an API key is available
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::new(None)
    }
}
