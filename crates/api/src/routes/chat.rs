//! Route definitions for the `/chat` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::chat;
use crate::state::AppState;

/// Routes mounted at `/chat`.
///
/// ```text
/// GET    /?projectId=       -> list
/// POST   /?projectId=       -> create
/// DELETE /?projectId=       -> clear
/// POST   /reply?projectId=  -> reply
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(chat::list).post(chat::create).delete(chat::clear))
        .route("/reply", post(chat::reply))
}
