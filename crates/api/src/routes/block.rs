//! Route definitions for the `/blocks` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::block;
use crate::state::AppState;

/// Routes mounted at `/blocks`.
///
/// ```text
/// GET    /?projectId=  -> list
/// POST   /?projectId=  -> create
/// PUT    /?projectId=  -> reorder
/// PUT    /{id}         -> update
/// DELETE /{id}         -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(block::list).post(block::create).put(block::reorder),
        )
        .route("/{id}", put(block::update).delete(block::delete))
}
