//! Route definitions for the `/ai` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::ai;
use crate::state::AppState;

/// Routes mounted at `/ai`.
///
/// ```text
/// GET  /models                      -> models
/// GET  /models/available            -> available_models
/// POST /verify                      -> verify
/// POST /generate                    -> generate
/// POST /suggest-blocks?projectId=   -> suggest_blocks
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/models", get(ai::models))
        .route("/models/available", get(ai::available_models))
        .route("/verify", post(ai::verify))
        .route("/generate", post(ai::generate))
        .route("/suggest-blocks", post(ai::suggest_blocks))
}
