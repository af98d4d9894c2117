//! Repository for the `files` table.

use blockcopy_core::types::DbId;
use sqlx::PgPool;

use crate::models::file::{CreateFile, ProjectFile};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, url, public_id, name, size, mime_type, file_type, \
                       content, created_at, updated_at";

/// Provides CRUD operations for project files and notes.
pub struct FileRepo;

impl FileRepo {
    /// Insert a new file record, returning the created row.
    ///
    /// If `file_type` is `None` in the input, defaults to `file`.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateFile,
    ) -> Result<ProjectFile, sqlx::Error> {
        let query = format!(
            "INSERT INTO files (project_id, url, public_id, name, size, mime_type, file_type, content)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, 'file'), $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectFile>(&query)
            .bind(project_id)
            .bind(&input.url)
            .bind(&input.public_id)
            .bind(input.name.trim())
            .bind(input.size)
            .bind(&input.mime_type)
            .bind(&input.file_type)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// List a project's files, newest first.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ProjectFile>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM files WHERE project_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, ProjectFile>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Find a file by ID if its project belongs to `user_id`.
    pub async fn find_owned(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<ProjectFile>, sqlx::Error> {
        sqlx::query_as::<_, ProjectFile>(
            "SELECT f.id, f.project_id, f.url, f.public_id, f.name, f.size, f.mime_type,
                    f.file_type, f.content, f.created_at, f.updated_at
             FROM files f
             JOIN projects p ON p.id = f.project_id
             WHERE f.id = $1 AND p.user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }

    /// Public ids of the uploaded assets attached to a project.
    pub async fn remote_asset_ids(pool: &PgPool, project_id: DbId) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT public_id FROM files
             WHERE project_id = $1 AND file_type = 'file' AND public_id IS NOT NULL AND public_id <> ''",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    /// Delete a file record by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM files WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
