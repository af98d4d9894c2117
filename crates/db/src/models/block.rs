//! Block entity model and DTOs.

use blockcopy_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A block row from the `blocks` table.
///
/// `sort_order` is exposed as `order` on the wire.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub content: String,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateBlock {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Appended after the last block when omitted.
    pub order: Option<i32>,
}

/// DTO for updating a block. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBlock {
    pub title: Option<String>,
    pub content: Option<String>,
    pub order: Option<i32>,
}

impl UpdateBlock {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.order.is_none()
    }
}
