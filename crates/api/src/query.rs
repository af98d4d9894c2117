//! Shared query parameter types for API handlers.

use blockcopy_core::types::DbId;
use serde::Deserialize;

use crate::error::AppError;

/// `?projectId=` scope for the project child resources (blocks, files,
/// chat, start section, block suggestions).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectScope {
    pub project_id: Option<DbId>,
}

impl ProjectScope {
    /// The project id, or 400 when the parameter is missing.
    pub fn require(&self) -> Result<DbId, AppError> {
        self.project_id
            .ok_or_else(|| AppError::BadRequest("Project ID is required".into()))
    }
}

/// Query parameters for `GET /projects`.
#[derive(Debug, Deserialize)]
pub struct ProjectListParams {
    pub status: Option<String>,
}
