//! Project file model and DTOs.

use blockcopy_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `files` table: either an uploaded asset or a text note.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFile {
    pub id: DbId,
    pub project_id: DbId,
    pub url: Option<String>,
    pub public_id: Option<String>,
    pub name: String,
    pub size: Option<i64>,
    #[serde(rename = "type")]
    pub mime_type: Option<String>,
    pub file_type: String,
    pub content: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a file record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFile {
    pub url: Option<String>,
    pub public_id: Option<String>,
    #[serde(default)]
    pub name: String,
    pub size: Option<i64>,
    #[serde(rename = "type")]
    pub mime_type: Option<String>,
    /// Defaults to `file` if omitted.
    pub file_type: Option<String>,
    pub content: Option<String>,
}
