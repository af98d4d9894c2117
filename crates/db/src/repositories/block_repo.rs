//! Repository for the `blocks` table.

use blockcopy_core::types::DbId;
use sqlx::PgPool;

use crate::models::block::{Block, CreateBlock, UpdateBlock};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, title, content, sort_order, created_at, updated_at";

/// Provides CRUD and ordering operations for blocks.
pub struct BlockRepo;

impl BlockRepo {
    /// Insert a new block at the given order, returning the created row.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateBlock,
        sort_order: i32,
    ) -> Result<Block, sqlx::Error> {
        let query = format!(
            "INSERT INTO blocks (project_id, title, content, sort_order)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Block>(&query)
            .bind(project_id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(sort_order)
            .fetch_one(pool)
            .await
    }

    /// Highest `sort_order` in a project, or `None` if it has no blocks.
    pub async fn max_order(pool: &PgPool, project_id: DbId) -> Result<Option<i32>, sqlx::Error> {
        let (max,): (Option<i32>,) =
            sqlx::query_as("SELECT MAX(sort_order) FROM blocks WHERE project_id = $1")
                .bind(project_id)
                .fetch_one(pool)
                .await?;
        Ok(max)
    }

    /// List a project's blocks in display order.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Block>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM blocks WHERE project_id = $1 ORDER BY sort_order ASC, id ASC"
        );
        sqlx::query_as::<_, Block>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Find a block by ID if its project belongs to `user_id`.
    pub async fn find_owned(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Block>, sqlx::Error> {
        sqlx::query_as::<_, Block>(
            "SELECT b.id, b.project_id, b.title, b.content, b.sort_order, b.created_at, b.updated_at
             FROM blocks b
             JOIN projects p ON p.id = b.project_id
             WHERE b.id = $1 AND p.user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }

    /// Update a block. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBlock,
    ) -> Result<Option<Block>, sqlx::Error> {
        let query = format!(
            "UPDATE blocks SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                sort_order = COALESCE($4, sort_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Block>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.order)
            .fetch_optional(pool)
            .await
    }

    /// Apply new orders to a project's blocks in one transaction.
    ///
    /// Pairs whose block does not belong to `project_id` are skipped.
    /// Returns the project's blocks in their new order.
    pub async fn reorder(
        pool: &PgPool,
        project_id: DbId,
        orders: &[(DbId, i32)],
    ) -> Result<Vec<Block>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut applied = 0u64;
        for (id, sort_order) in orders {
            let result =
                sqlx::query("UPDATE blocks SET sort_order = $1 WHERE id = $2 AND project_id = $3")
                    .bind(sort_order)
                    .bind(id)
                    .bind(project_id)
                    .execute(&mut *tx)
                    .await?;
            applied += result.rows_affected();
        }
        tx.commit().await?;
        tracing::debug!(project_id, requested = orders.len(), applied, "Reordered blocks");

        Self::list_for_project(pool, project_id).await
    }

    /// Delete a block by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM blocks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
