//! Handlers for the `/projects` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use blockcopy_core::error::CoreError;
use blockcopy_core::project::{validate_name, validate_status};
use blockcopy_core::types::DbId;
use blockcopy_db::models::block::Block;
use blockcopy_db::models::chat_message::ChatMessage;
use blockcopy_db::models::file::ProjectFile;
use blockcopy_db::models::project::{CreateProject, Project, ProjectSummary, UpdateProject};
use blockcopy_db::models::start_section::StartSection;
use blockcopy_db::repositories::{
    BlockRepo, ChatMessageRepo, FileRepo, ProjectRepo, StartSectionRepo,
};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, PathParam, QueryParams};
use crate::handlers::file::destroy_remote_assets;
use crate::handlers::owned_project;
use crate::middleware::auth::AuthUser;
use crate::query::ProjectListParams;
use crate::response::MessageResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub projects: Vec<ProjectSummary>,
}

#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub project: Project,
}

/// A project with everything attached to it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetailResponse {
    pub project: Project,
    pub start_section: Option<StartSection>,
    pub blocks: Vec<Block>,
    pub files: Vec<ProjectFile>,
    pub chat_messages: Vec<ChatMessage>,
}

/// GET /api/v1/projects
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(params): QueryParams<ProjectListParams>,
) -> AppResult<Json<ProjectListResponse>> {
    let status = params.status.as_deref().filter(|s| !s.is_empty());
    if let Some(status) = status {
        validate_status(status)?;
    }
    let projects = ProjectRepo::list_for_user(&state.pool, auth.id(), status).await?;
    Ok(Json(ProjectListResponse { projects }))
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(input): JsonBody<CreateProject>,
) -> AppResult<(StatusCode, Json<ProjectResponse>)> {
    validate_name(&input.name)?;
    if let Some(status) = input.status.as_deref() {
        validate_status(status)?;
    }
    let project = ProjectRepo::create(&state.pool, auth.id(), &input).await?;
    tracing::info!(project_id = project.id, user_id = auth.id(), "Project created");
    Ok((StatusCode::CREATED, Json(ProjectResponse { project })))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<ProjectDetailResponse>> {
    let project = owned_project(&state, id, auth.id()).await?;

    let start_section = StartSectionRepo::find_for_project(&state.pool, id).await?;
    let blocks = BlockRepo::list_for_project(&state.pool, id).await?;
    let files = FileRepo::list_for_project(&state.pool, id).await?;
    let chat_messages = ChatMessageRepo::list_for_project(&state.pool, id).await?;

    Ok(Json(ProjectDetailResponse {
        project,
        start_section,
        blocks,
        files,
        chat_messages,
    }))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParam(id): PathParam<DbId>,
    JsonBody(input): JsonBody<UpdateProject>,
) -> AppResult<Json<ProjectResponse>> {
    if input.is_empty() {
        return Err(AppError::BadRequest("No fields to update".into()));
    }
    if let Some(name) = input.name.as_deref() {
        validate_name(name)?;
    }
    if let Some(status) = input.status.as_deref() {
        validate_status(status)?;
    }

    let project = ProjectRepo::update(&state.pool, id, auth.id(), &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(ProjectResponse { project }))
}

/// DELETE /api/v1/projects/{id}
///
/// Child rows go with the project. Uploaded assets are removed from the
/// media host afterwards; failures there are logged only.
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<MessageResponse>> {
    owned_project(&state, id, auth.id()).await?;

    let asset_ids = if state.media.is_some() {
        FileRepo::remote_asset_ids(&state.pool, id).await?
    } else {
        Vec::new()
    };

    ProjectRepo::delete(&state.pool, id, auth.id()).await?;
    tracing::info!(project_id = id, user_id = auth.id(), "Project deleted");

    destroy_remote_assets(&state, &asset_ids).await;

    Ok(Json(MessageResponse::new("Project deleted successfully")))
}
