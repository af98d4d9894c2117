//! Repository for the `chat_messages` table.

use blockcopy_core::types::DbId;
use sqlx::PgPool;

use crate::models::chat_message::ChatMessage;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, role, content, created_at, updated_at";

/// Provides operations on project chat threads.
pub struct ChatMessageRepo;

impl ChatMessageRepo {
    /// Append a message to a project's thread.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        role: &str,
        content: &str,
    ) -> Result<ChatMessage, sqlx::Error> {
        let query = format!(
            "INSERT INTO chat_messages (project_id, role, content)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ChatMessage>(&query)
            .bind(project_id)
            .bind(role)
            .bind(content)
            .fetch_one(pool)
            .await
    }

    /// List a project's thread, oldest first.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ChatMessage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM chat_messages WHERE project_id = $1 ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, ChatMessage>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Remove every message of a project's thread. Returns the count removed.
    pub async fn clear_for_project(pool: &PgPool, project_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM chat_messages WHERE project_id = $1")
            .bind(project_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
