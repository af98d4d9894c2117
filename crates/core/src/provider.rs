//! Seams for the external collaborators: a chat-completion language model
//! and a media host for uploaded files.
//!
//! The API layer holds these as trait objects so the concrete HTTP clients
//! live in their own crates and tests can substitute in-memory fakes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Failure reported by an external provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The request never produced a response (network, DNS, TLS, timeout).
    #[error("Request to provider failed: {0}")]
    Transport(String),

    /// The provider answered with a non-success status.
    #[error("Provider error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The provider answered but the payload was not understood.
    #[error("Unexpected provider response: {0}")]
    InvalidResponse(String),
}

// ---------------------------------------------------------------------------
// Language model
// ---------------------------------------------------------------------------

/// One message of a chat-completion conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: String,
    pub content: String,
}

impl PromptMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }
}

/// A model offered by the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub context_length: Option<u64>,
}

#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Model used when a request does not name one.
    fn default_model(&self) -> &str;

    /// Run a chat completion and return the assistant text.
    async fn complete(
        &self,
        model: &str,
        messages: &[PromptMessage],
    ) -> Result<String, ProviderError>;

    /// Models available from the provider.
    async fn list_models(&self) -> Result<Vec<ModelInfo>, ProviderError>;

    /// Check whether an API key is accepted. `None` checks the configured key.
    async fn verify_key(&self, api_key: Option<&str>) -> Result<bool, ProviderError>;
}

// ---------------------------------------------------------------------------
// Media host
// ---------------------------------------------------------------------------

/// A file to be stored on the media host.
#[derive(Debug, Clone)]
pub struct MediaUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
    /// Destination folder, e.g. `projects/42`.
    pub folder: String,
}

/// Where the media host stored an upload.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredMedia {
    pub public_id: String,
    pub secure_url: String,
    pub resource_type: String,
    pub bytes: i64,
}

#[async_trait]
pub trait MediaStore: Send + Sync {
    async fn upload(&self, upload: MediaUpload) -> Result<StoredMedia, ProviderError>;

    /// Remove a stored asset. Destroying an unknown id is not an error.
    async fn destroy(&self, public_id: &str) -> Result<(), ProviderError>;
}
