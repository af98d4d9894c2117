//! Handlers for the `/start-section` resource: one questionnaire per project.

use axum::extract::State;
use axum::Json;
use blockcopy_db::models::start_section::{StartSection, StartSectionFields};
use blockcopy_db::repositories::StartSectionRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::{JsonBody, QueryParams};
use crate::handlers::owned_project;
use crate::middleware::auth::AuthUser;
use crate::query::ProjectScope;
use crate::response::MessageResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartSectionResponse {
    /// `null` until the questionnaire is first saved.
    pub start_section: Option<StartSection>,
}

/// GET /api/v1/start-section?projectId=
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(scope): QueryParams<ProjectScope>,
) -> AppResult<Json<StartSectionResponse>> {
    let project = owned_project(&state, scope.require()?, auth.id()).await?;
    let start_section = StartSectionRepo::find_for_project(&state.pool, project.id).await?;
    Ok(Json(StartSectionResponse { start_section }))
}

/// POST or PUT /api/v1/start-section?projectId=
///
/// Saves the whole questionnaire: fields missing from the body are cleared.
pub async fn save(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(scope): QueryParams<ProjectScope>,
    JsonBody(fields): JsonBody<StartSectionFields>,
) -> AppResult<Json<StartSectionResponse>> {
    let project = owned_project(&state, scope.require()?, auth.id()).await?;
    let saved = StartSectionRepo::upsert(&state.pool, project.id, &fields).await?;
    Ok(Json(StartSectionResponse {
        start_section: Some(saved),
    }))
}

/// DELETE /api/v1/start-section?projectId=
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(scope): QueryParams<ProjectScope>,
) -> AppResult<Json<MessageResponse>> {
    let project = owned_project(&state, scope.require()?, auth.id()).await?;
    StartSectionRepo::delete_for_project(&state.pool, project.id).await?;
    Ok(Json(MessageResponse::new("Start section deleted successfully")))
}
