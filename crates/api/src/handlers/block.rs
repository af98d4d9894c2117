//! Handlers for the `/blocks` resource.
//!
//! Collection routes are scoped by `?projectId=`; item routes resolve the
//! project through the block itself.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use blockcopy_core::block::{assign_orders, next_order, validate_reorder};
use blockcopy_core::error::CoreError;
use blockcopy_core::types::DbId;
use blockcopy_db::models::block::{Block, CreateBlock, UpdateBlock};
use blockcopy_db::repositories::BlockRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, PathParam, QueryParams};
use crate::handlers::owned_project;
use crate::middleware::auth::AuthUser;
use crate::query::ProjectScope;
use crate::response::MessageResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct BlockListResponse {
    pub blocks: Vec<Block>,
}

#[derive(Debug, Serialize)]
pub struct BlockResponse {
    pub block: Block,
}

/// Request body for the reorder endpoint: block ids in their new order.
#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    #[serde(default)]
    pub blocks: Vec<DbId>,
}

fn block_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Block", id })
}

/// GET /api/v1/blocks?projectId=
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(scope): QueryParams<ProjectScope>,
) -> AppResult<Json<BlockListResponse>> {
    let project = owned_project(&state, scope.require()?, auth.id()).await?;
    let blocks = BlockRepo::list_for_project(&state.pool, project.id).await?;
    Ok(Json(BlockListResponse { blocks }))
}

/// POST /api/v1/blocks?projectId=
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(scope): QueryParams<ProjectScope>,
    JsonBody(input): JsonBody<CreateBlock>,
) -> AppResult<(StatusCode, Json<BlockResponse>)> {
    let project = owned_project(&state, scope.require()?, auth.id()).await?;

    let sort_order = match input.order {
        Some(order) => order,
        None => next_order(BlockRepo::max_order(&state.pool, project.id).await?)?,
    };
    let block = BlockRepo::create(&state.pool, project.id, &input, sort_order).await?;
    Ok((StatusCode::CREATED, Json(BlockResponse { block })))
}

/// PUT /api/v1/blocks?projectId=
///
/// Each listed block takes its position in the list as its order. Ids from
/// other projects are ignored.
pub async fn reorder(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(scope): QueryParams<ProjectScope>,
    JsonBody(input): JsonBody<ReorderRequest>,
) -> AppResult<Json<BlockListResponse>> {
    let project = owned_project(&state, scope.require()?, auth.id()).await?;
    validate_reorder(&input.blocks)?;

    let blocks = BlockRepo::reorder(&state.pool, project.id, &assign_orders(&input.blocks)).await?;
    Ok(Json(BlockListResponse { blocks }))
}

/// PUT /api/v1/blocks/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParam(id): PathParam<DbId>,
    JsonBody(input): JsonBody<UpdateBlock>,
) -> AppResult<Json<BlockResponse>> {
    if input.is_empty() {
        return Err(AppError::BadRequest("No fields to update".into()));
    }
    BlockRepo::find_owned(&state.pool, id, auth.id())
        .await?
        .ok_or_else(|| block_not_found(id))?;

    let block = BlockRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| block_not_found(id))?;
    Ok(Json(BlockResponse { block }))
}

/// DELETE /api/v1/blocks/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<MessageResponse>> {
    BlockRepo::find_owned(&state.pool, id, auth.id())
        .await?
        .ok_or_else(|| block_not_found(id))?;

    BlockRepo::delete(&state.pool, id).await?;
    Ok(Json(MessageResponse::new("Block deleted successfully")))
}
