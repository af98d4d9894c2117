pub mod ai;
pub mod auth;
pub mod block;
pub mod chat;
pub mod context;
pub mod file;
pub mod project;
pub mod start_section;
pub mod upload;

use blockcopy_core::error::CoreError;
use blockcopy_core::types::DbId;
use blockcopy_db::models::project::Project;
use blockcopy_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Load a project owned by `user_id`.
///
/// Projects of other users are reported as missing, never as forbidden.
pub(crate) async fn owned_project(
    state: &AppState,
    project_id: DbId,
    user_id: DbId,
) -> AppResult<Project> {
    ProjectRepo::find_owned(&state.pool, project_id, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))
}
