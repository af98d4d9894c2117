//! Project entity model and DTOs.

use blockcopy_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub client_name: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A project row with child counts, as returned by the project listing.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub project: Project,
    pub block_count: i64,
    pub file_count: i64,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    #[serde(default)]
    pub name: String,
    pub client_name: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    /// Defaults to `active` if omitted.
    pub status: Option<String>,
}

/// DTO for updating an existing project. All fields are optional; `null`
/// is treated the same as an absent field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub name: Option<String>,
    pub client_name: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub status: Option<String>,
}

impl UpdateProject {
    /// True when the request carries nothing to change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.client_name.is_none()
            && self.description.is_none()
            && self.content.is_none()
            && self.status.is_none()
    }
}
