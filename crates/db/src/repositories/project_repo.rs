//! Repository for the `projects` table.

use blockcopy_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, ProjectSummary, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, user_id, name, client_name, description, content, status, created_at, updated_at";

/// Provides owner-scoped CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project for `user_id`, returning the created row.
    ///
    /// If `status` is `None` in the input, defaults to `active`.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateProject,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (user_id, name, client_name, description, content, status)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 'active'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(user_id)
            .bind(input.name.trim())
            .bind(&input.client_name)
            .bind(&input.description)
            .bind(&input.content)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Find a project by ID if it belongs to `user_id`.
    pub async fn find_owned(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's projects with block and file counts, most recently
    /// updated first. Optionally filtered by status.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        status: Option<&str>,
    ) -> Result<Vec<ProjectSummary>, sqlx::Error> {
        sqlx::query_as::<_, ProjectSummary>(
            "SELECT p.id, p.user_id, p.name, p.client_name, p.description, p.content,
                    p.status, p.created_at, p.updated_at,
                    (SELECT COUNT(*) FROM blocks b WHERE b.project_id = p.id) AS block_count,
                    (SELECT COUNT(*) FROM files f WHERE f.project_id = p.id) AS file_count
             FROM projects p
             WHERE p.user_id = $1
               AND ($2::TEXT IS NULL OR p.status = $2)
             ORDER BY p.updated_at DESC, p.id DESC",
        )
        .bind(user_id)
        .bind(status)
        .fetch_all(pool)
        .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` is owned by `user_id`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = COALESCE($3, name),
                client_name = COALESCE($4, client_name),
                description = COALESCE($5, description),
                content = COALESCE($6, content),
                status = COALESCE($7, status)
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(user_id)
            .bind(input.name.as_deref().map(str::trim))
            .bind(&input.client_name)
            .bind(&input.description)
            .bind(&input.content)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project owned by `user_id`. Children are removed by
    /// `ON DELETE CASCADE`. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
