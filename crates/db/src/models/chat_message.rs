//! Chat message model and DTOs.

use blockcopy_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `chat_messages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: DbId,
    pub project_id: DbId,
    pub role: String,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for appending a message to a project thread.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateChatMessage {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: String,
}
