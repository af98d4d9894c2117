//! HTTP client for the OpenRouter API.

use std::time::Duration;

use async_trait::async_trait;
use blockcopy_core::provider::{LanguageModel, ModelInfo, PromptMessage, ProviderError};

use crate::catalog::DEFAULT_MODEL;
use crate::messages::{error_message, ChatCompletionRequest, ChatCompletionResponse, ModelsResponse};

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Sent as `X-Title` so requests are attributed to this application.
const APP_TITLE: &str = "BlockCopy";

/// HTTP request timeout; completions of up to 4000 tokens can be slow.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Connection settings for [`OpenRouterClient`].
#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    pub api_key: String,
    pub base_url: String,
    pub default_model: String,
    /// Sent as `HTTP-Referer`.
    pub referer: String,
}

impl OpenRouterConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            default_model: DEFAULT_MODEL.to_string(),
            referer: "http://localhost:3000".to_string(),
        }
    }
}

/// Errors from the OpenRouter REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum OpenRouterError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// OpenRouter returned a non-2xx status code.
    #[error("OpenRouter API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message from the error envelope, or the raw body.
        message: String,
    },
}

impl From<OpenRouterError> for ProviderError {
    fn from(err: OpenRouterError) -> Self {
        match err {
            OpenRouterError::Request(e) if e.is_decode() => {
                ProviderError::InvalidResponse(e.to_string())
            }
            OpenRouterError::Request(e) => ProviderError::Transport(e.to_string()),
            OpenRouterError::Api { status, message } => ProviderError::Api { status, message },
        }
    }
}

/// Client for one OpenRouter account.
pub struct OpenRouterClient {
    client: reqwest::Client,
    config: OpenRouterConfig,
}

impl OpenRouterClient {
    /// Build a client with its own connection pool.
    pub fn new(config: OpenRouterConfig) -> Result<Self, OpenRouterError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, config })
    }

    /// Reuse an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: OpenRouterConfig) -> Self {
        Self { client, config }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.config.base_url.trim_end_matches('/'))
    }

    /// Send a chat completion and return the first choice's text.
    pub async fn chat_completion(
        &self,
        model: &str,
        messages: &[PromptMessage],
    ) -> Result<String, OpenRouterError> {
        let body = ChatCompletionRequest::new(model, messages);
        let response = self
            .client
            .post(self.url("chat/completions"))
            .bearer_auth(&self.config.api_key)
            .header("HTTP-Referer", &self.config.referer)
            .header("X-Title", APP_TITLE)
            .json(&body)
            .send()
            .await?;

        let parsed: ChatCompletionResponse = Self::ensure_success(response).await?.json().await?;
        Ok(parsed.into_text())
    }

    /// List every model available to the account.
    pub async fn models(&self) -> Result<Vec<ModelInfo>, OpenRouterError> {
        let response = self
            .client
            .get(self.url("models"))
            .bearer_auth(&self.config.api_key)
            .send()
            .await?;

        let parsed: ModelsResponse = Self::ensure_success(response).await?.json().await?;
        Ok(parsed.data.into_iter().map(Into::into).collect())
    }

    /// Check whether `api_key` is accepted by `GET /auth/key`.
    ///
    /// A rejected key is `Ok(false)`; only transport failures are errors.
    pub async fn check_key(&self, api_key: &str) -> Result<bool, OpenRouterError> {
        let response = self
            .client
            .get(self.url("auth/key"))
            .bearer_auth(api_key)
            .send()
            .await?;
        Ok(response.status().is_success())
    }

    /// Ensure the response has a success status code. On failure, the
    /// error envelope's message (or the raw body) is carried in
    /// [`OpenRouterError::Api`].
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, OpenRouterError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            let message = error_message(&body).unwrap_or(body);
            tracing::warn!(status = status.as_u16(), %message, "OpenRouter request failed");
            return Err(OpenRouterError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl LanguageModel for OpenRouterClient {
    fn default_model(&self) -> &str {
        &self.config.default_model
    }

    async fn complete(
        &self,
        model: &str,
        messages: &[PromptMessage],
    ) -> Result<String, ProviderError> {
        Ok(self.chat_completion(model, messages).await?)
    }

    async fn list_models(&self) -> Result<Vec<ModelInfo>, ProviderError> {
        Ok(self.models().await?)
    }

    async fn verify_key(&self, api_key: Option<&str>) -> Result<bool, ProviderError> {
        let key = api_key.unwrap_or(&self.config.api_key);
        Ok(self.check_key(key).await?)
    }
}
