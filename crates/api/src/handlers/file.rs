//! Handlers for the `/files` resource: uploaded assets and text notes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use blockcopy_core::error::CoreError;
use blockcopy_core::file_kind::{has_remote_asset, validate_file_name, validate_file_type};
use blockcopy_core::types::DbId;
use blockcopy_db::models::file::{CreateFile, ProjectFile};
use blockcopy_db::repositories::FileRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, PathParam, QueryParams};
use crate::handlers::owned_project;
use crate::middleware::auth::AuthUser;
use crate::query::ProjectScope;
use crate::response::MessageResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct FileListResponse {
    pub files: Vec<ProjectFile>,
}

#[derive(Debug, Serialize)]
pub struct FileResponse {
    pub file: ProjectFile,
}

/// GET /api/v1/files?projectId=
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(scope): QueryParams<ProjectScope>,
) -> AppResult<Json<FileListResponse>> {
    let project = owned_project(&state, scope.require()?, auth.id()).await?;
    let files = FileRepo::list_for_project(&state.pool, project.id).await?;
    Ok(Json(FileListResponse { files }))
}

/// POST /api/v1/files?projectId=
///
/// Records an already-hosted asset or a text note.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(scope): QueryParams<ProjectScope>,
    JsonBody(input): JsonBody<CreateFile>,
) -> AppResult<(StatusCode, Json<FileResponse>)> {
    let project = owned_project(&state, scope.require()?, auth.id()).await?;
    validate_file_name(&input.name)?;
    if let Some(file_type) = input.file_type.as_deref() {
        validate_file_type(file_type)?;
    }

    let file = FileRepo::create(&state.pool, project.id, &input).await?;
    Ok((StatusCode::CREATED, Json(FileResponse { file })))
}

/// DELETE /api/v1/files/{id}
///
/// An uploaded asset is destroyed on the media host before the record goes.
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let file = FileRepo::find_owned(&state.pool, id, auth.id())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "File", id }))?;

    if let Some(public_id) = file.public_id.as_deref() {
        if has_remote_asset(&file.file_type, Some(public_id)) {
            destroy_remote_assets(&state, &[public_id.to_string()]).await;
        }
    }

    FileRepo::delete(&state.pool, id).await?;
    Ok(Json(MessageResponse::new("File deleted successfully")))
}

/// Destroy assets on the media host, logging failures instead of returning
/// them. Does nothing when no media host is configured.
pub(crate) async fn destroy_remote_assets(state: &AppState, public_ids: &[String]) {
    let Some(media) = state.media.as_ref() else {
        return;
    };
    for public_id in public_ids {
        if let Err(e) = media.destroy(public_id).await {
            tracing::warn!(%public_id, error = %e, "Failed to destroy remote asset");
        }
    }
}
