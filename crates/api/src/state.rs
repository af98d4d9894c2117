use std::sync::Arc;

use blockcopy_core::provider::{LanguageModel, MediaStore};

use crate::config::ServerConfig;
use crate::error::AppError;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference counted and everything else is
/// behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: blockcopy_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// Chat-completion provider; `None` when no API key is configured.
    pub llm: Option<Arc<dyn LanguageModel>>,
    /// Media host for uploads; `None` when no credentials are configured.
    pub media: Option<Arc<dyn MediaStore>>,
}

impl AppState {
    /// The language model, or 503 when AI is not configured.
    pub fn llm(&self) -> Result<&Arc<dyn LanguageModel>, AppError> {
        self.llm
            .as_ref()
            .ok_or_else(|| AppError::ServiceUnavailable("AI service is not configured".into()))
    }

    /// The media host, or 503 when uploads are not configured.
    pub fn media(&self) -> Result<&Arc<dyn MediaStore>, AppError> {
        self.media
            .as_ref()
            .ok_or_else(|| AppError::ServiceUnavailable("File storage is not configured".into()))
    }
}
