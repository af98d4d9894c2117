//! Route definitions for the `/start-section` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::start_section;
use crate::state::AppState;

/// Routes mounted at `/start-section`. POST and PUT both save.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(start_section::get)
            .post(start_section::save)
            .put(start_section::save)
            .delete(start_section::delete),
    )
}
