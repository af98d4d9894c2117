//! Repository for the `start_sections` table.

use blockcopy_core::start_section::{column_list, FIELDS};
use blockcopy_core::types::DbId;
use sqlx::PgPool;

use crate::models::start_section::{StartSection, StartSectionFields};

/// Provides operations on a project's start section (at most one per project).
pub struct StartSectionRepo;

impl StartSectionRepo {
    /// Fetch the start section of a project, if one was saved.
    pub async fn find_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Option<StartSection>, sqlx::Error> {
        let query = format!(
            "SELECT id, project_id, {}, created_at, updated_at
             FROM start_sections WHERE project_id = $1",
            column_list()
        );
        sqlx::query_as::<_, StartSection>(&query)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// Create or fully replace a project's start section.
    ///
    /// Every field is written; `None` values clear the stored answer.
    pub async fn upsert(
        pool: &PgPool,
        project_id: DbId,
        fields: &StartSectionFields,
    ) -> Result<StartSection, sqlx::Error> {
        let query = upsert_sql();
        let mut q = sqlx::query_as::<_, StartSection>(&query).bind(project_id);
        for value in fields.values() {
            q = q.bind(value);
        }
        q.fetch_one(pool).await
    }

    /// Delete a project's start section. Returns `true` if a row was removed.
    pub async fn delete_for_project(pool: &PgPool, project_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM start_sections WHERE project_id = $1")
            .bind(project_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// `INSERT ... ON CONFLICT (project_id) DO UPDATE` over every questionnaire
/// column. `$1` is the project id, `$2..` the fields in [`FIELDS`] order.
fn upsert_sql() -> String {
    let columns = column_list();
    let placeholders: Vec<String> = (0..FIELDS.len()).map(|i| format!("${}", i + 2)).collect();
    let updates: Vec<String> = FIELDS
        .iter()
        .map(|field| format!("{field} = EXCLUDED.{field}"))
        .collect();
    format!(
        "INSERT INTO start_sections (project_id, {columns})
         VALUES ($1, {})
         ON CONFLICT (project_id) DO UPDATE SET {}
         RETURNING id, project_id, {columns}, created_at, updated_at",
        placeholders.join(", "),
        updates.join(", ")
    )
}
