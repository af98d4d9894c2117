//! Route definitions for the `/files` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::file;
use crate::state::AppState;

/// Routes mounted at `/files`.
///
/// ```text
/// GET    /?projectId=  -> list
/// POST   /?projectId=  -> create
/// DELETE /{id}         -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(file::list).post(file::create))
        .route("/{id}", delete(file::delete))
}
