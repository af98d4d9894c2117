pub mod ai;
pub mod auth;
pub mod block;
pub mod chat;
pub mod file;
pub mod health;
pub mod project;
pub mod start_section;

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                                   register (public)
/// /auth/login                                      login (public)
/// /auth/me                                         current user
/// /auth/logout                                     end the presented session
///
/// /projects                                        list, create
/// /projects/{id}                                   get (with children), update, delete
///
/// /blocks?projectId=                               list, create, reorder (PUT)
/// /blocks/{id}                                     update, delete
///
/// /files?projectId=                                list, create
/// /files/{id}                                      delete
/// /upload                                          multipart upload (POST)
///
/// /chat?projectId=                                 list, create, clear (DELETE)
/// /chat/reply?projectId=                           assistant reply (POST)
///
/// /start-section?projectId=                        get, save (POST/PUT), delete
///
/// /ai/models                                       curated model list
/// /ai/models/available                             provider model list
/// /ai/verify                                       API key check (POST)
/// /ai/generate                                     free-form generation (POST)
/// /ai/suggest-blocks?projectId=                    block suggestions (POST)
/// ```
///
/// Everything except register and login requires a Bearer session token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/projects", project::router())
        .nest("/blocks", block::router())
        .nest("/files", file::router())
        .route("/upload", post(handlers::upload::upload))
        .nest("/chat", chat::router())
        .nest("/start-section", start_section::router())
        .nest("/ai", ai::router())
}
