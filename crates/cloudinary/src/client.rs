//! HTTP client for the Cloudinary upload API.

use std::time::Duration;

use async_trait::async_trait;
use blockcopy_core::provider::{MediaStore, MediaUpload, ProviderError, StoredMedia};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::signature::sign;

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://api.cloudinary.com/v1_1";

const SIGNATURE_ALGORITHM: &str = "sha256";

/// Uploads of up to the configured body limit can take a while.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Resource types tried, in order, when destroying an asset whose type was
/// not recorded. `auto` uploads land in one of these.
const DESTROY_RESOURCE_TYPES: &[&str] = &["image", "video", "raw"];

/// Credentials for one Cloudinary cloud.
#[derive(Debug, Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    pub base_url: String,
}

impl CloudinaryConfig {
    pub fn new(
        cloud_name: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            cloud_name: cloud_name.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CloudinaryError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Cloudinary returned a non-2xx status code.
    #[error("Cloudinary API error ({status}): {message}")]
    Api { status: u16, message: String },
}

impl From<CloudinaryError> for ProviderError {
    fn from(err: CloudinaryError) -> Self {
        match err {
            CloudinaryError::Request(e) if e.is_decode() => {
                ProviderError::InvalidResponse(e.to_string())
            }
            CloudinaryError::Request(e) => ProviderError::Transport(e.to_string()),
            CloudinaryError::Api { status, message } => ProviderError::Api { status, message },
        }
    }
}

/// Successful upload response (fields we use).
#[derive(Debug, Deserialize)]
pub struct UploadResponse {
    pub public_id: String,
    pub secure_url: String,
    pub resource_type: String,
    #[serde(default)]
    pub bytes: i64,
}

impl From<UploadResponse> for StoredMedia {
    fn from(r: UploadResponse) -> Self {
        Self {
            public_id: r.public_id,
            secure_url: r.secure_url,
            resource_type: r.resource_type,
            bytes: r.bytes,
        }
    }
}

/// Response of the destroy endpoint: `{"result": "ok" | "not found"}`.
#[derive(Debug, Deserialize)]
pub struct DestroyResponse {
    pub result: String,
}

/// Error envelope: `{"error": {"message": ...}}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

pub struct CloudinaryClient {
    client: reqwest::Client,
    config: CloudinaryConfig,
}

impl CloudinaryClient {
    pub fn new(config: CloudinaryConfig) -> Result<Self, CloudinaryError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, config })
    }

    pub fn with_client(client: reqwest::Client, config: CloudinaryConfig) -> Self {
        Self { client, config }
    }

    fn url(&self, resource_type: &str, action: &str) -> String {
        format!(
            "{}/{}/{resource_type}/{action}",
            self.config.base_url.trim_end_matches('/'),
            self.config.cloud_name
        )
    }

    /// Signed parameter set for a request made now. `extra` is merged into
    /// the signature; the returned list is ready to send.
    fn signed_params(&self, extra: Vec<(&'static str, String)>) -> Vec<(&'static str, String)> {
        let mut params = extra;
        params.push(("timestamp", chrono::Utc::now().timestamp().to_string()));
        let signature = sign(&params, &self.config.api_secret);
        params.push(("api_key", self.config.api_key.clone()));
        params.push(("signature_algorithm", SIGNATURE_ALGORITHM.to_string()));
        params.push(("signature", signature));
        params
    }

    /// Upload raw bytes into `folder`, letting Cloudinary detect the
    /// resource type.
    pub async fn upload_bytes(
        &self,
        upload: MediaUpload,
    ) -> Result<UploadResponse, CloudinaryError> {
        let params = self.signed_params(vec![("folder", upload.folder)]);

        let part = Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(&upload.mime_type)?;
        let form = params
            .into_iter()
            .fold(Form::new(), |form, (key, value)| form.text(key, value))
            .part("file", part);

        let response = self
            .client
            .post(self.url("auto", "upload"))
            .multipart(form)
            .send()
            .await?;

        let uploaded: UploadResponse = Self::ensure_success(response).await?.json().await?;
        tracing::debug!(
            public_id = %uploaded.public_id,
            resource_type = %uploaded.resource_type,
            bytes = uploaded.bytes,
            "Cloudinary upload stored"
        );
        Ok(uploaded)
    }

    /// Destroy one asset of a known resource type. Returns `true` when
    /// Cloudinary reports it was removed.
    pub async fn destroy_as(
        &self,
        public_id: &str,
        resource_type: &str,
    ) -> Result<bool, CloudinaryError> {
        let params = self.signed_params(vec![("public_id", public_id.to_string())]);
        let response = self
            .client
            .post(self.url(resource_type, "destroy"))
            .form(&params)
            .send()
            .await?;

        let body: DestroyResponse = Self::ensure_success(response).await?.json().await?;
        Ok(body.result == "ok")
    }

    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, CloudinaryError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            let message = error_message(&body).unwrap_or(body);
            tracing::warn!(status = status.as_u16(), %message, "Cloudinary request failed");
            return Err(CloudinaryError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }
}

fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .and_then(|e| e.message)
}

#[async_trait]
impl MediaStore for CloudinaryClient {
    async fn upload(&self, upload: MediaUpload) -> Result<StoredMedia, ProviderError> {
        Ok(self.upload_bytes(upload).await?.into())
    }

    async fn destroy(&self, public_id: &str) -> Result<(), ProviderError> {
        for resource_type in DESTROY_RESOURCE_TYPES {
            if self.destroy_as(public_id, resource_type).await? {
                return Ok(());
            }
        }
        tracing::debug!(%public_id, "Cloudinary asset not found under any resource type");
        Ok(())
    }
}
