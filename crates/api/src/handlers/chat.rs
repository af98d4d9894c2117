//! Handlers for the `/chat` resource: a project's conversation thread and
//! the assistant reply endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use blockcopy_core::chat::{history_window, validate_message, ROLE_ASSISTANT, ROLE_USER};
use blockcopy_core::prompt::chat_system_prompt;
use blockcopy_core::provider::PromptMessage;
use blockcopy_db::models::chat_message::{ChatMessage, CreateChatMessage};
use blockcopy_db::repositories::ChatMessageRepo;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::extract::{JsonBody, QueryParams};
use crate::handlers::context::load_project_context;
use crate::handlers::owned_project;
use crate::middleware::auth::AuthUser;
use crate::query::ProjectScope;
use crate::response::MessageResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct MessageListResponse {
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct ChatMessageResponse {
    pub message: ChatMessage,
}

/// Request body for `POST /chat/reply`.
#[derive(Debug, Deserialize)]
pub struct ReplyRequest {
    #[serde(default)]
    pub content: String,
    /// Overrides the configured default model.
    pub model: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyResponse {
    pub user_message: ChatMessage,
    pub assistant_message: ChatMessage,
}

/// GET /api/v1/chat?projectId=
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(scope): QueryParams<ProjectScope>,
) -> AppResult<Json<MessageListResponse>> {
    let project = owned_project(&state, scope.require()?, auth.id()).await?;
    let messages = ChatMessageRepo::list_for_project(&state.pool, project.id).await?;
    Ok(Json(MessageListResponse { messages }))
}

/// POST /api/v1/chat?projectId=
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(scope): QueryParams<ProjectScope>,
    JsonBody(input): JsonBody<CreateChatMessage>,
) -> AppResult<(StatusCode, Json<ChatMessageResponse>)> {
    let project = owned_project(&state, scope.require()?, auth.id()).await?;
    validate_message(&input.role, &input.content)?;

    let message =
        ChatMessageRepo::create(&state.pool, project.id, &input.role, &input.content).await?;
    Ok((StatusCode::CREATED, Json(ChatMessageResponse { message })))
}

/// DELETE /api/v1/chat?projectId=
pub async fn clear(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(scope): QueryParams<ProjectScope>,
) -> AppResult<Json<MessageResponse>> {
    let project = owned_project(&state, scope.require()?, auth.id()).await?;
    let removed = ChatMessageRepo::clear_for_project(&state.pool, project.id).await?;
    tracing::debug!(project_id = project.id, removed, "Chat history cleared");
    Ok(Json(MessageResponse::new("Chat history cleared successfully")))
}

/// POST /api/v1/chat/reply?projectId=
///
/// Stores the user's message, asks the model for a reply using the project
/// summary and the recent thread, and stores the reply. The user's message
/// is kept even when the model call fails.
pub async fn reply(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(scope): QueryParams<ProjectScope>,
    JsonBody(input): JsonBody<ReplyRequest>,
) -> AppResult<(StatusCode, Json<ReplyResponse>)> {
    let project = owned_project(&state, scope.require()?, auth.id()).await?;
    validate_message(ROLE_USER, &input.content)?;
    let llm = state.llm()?.clone();

    let user_message =
        ChatMessageRepo::create(&state.pool, project.id, ROLE_USER, &input.content).await?;

    let context = load_project_context(&state, &project).await?;
    let thread = ChatMessageRepo::list_for_project(&state.pool, project.id).await?;

    let mut prompt = vec![PromptMessage::system(chat_system_prompt(&context))];
    prompt.extend(history_window(&thread).iter().map(|m| PromptMessage {
        role: m.role.clone(),
        content: m.content.clone(),
    }));

    let model = input
        .model
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| llm.default_model());
    let answer = llm.complete(model, &prompt).await?;

    let assistant_message =
        ChatMessageRepo::create(&state.pool, project.id, ROLE_ASSISTANT, &answer).await?;
    tracing::info!(
        project_id = project.id,
        model,
        history = prompt.len() - 1,
        "Assistant replied"
    );

    Ok((
        StatusCode::CREATED,
        Json(ReplyResponse {
            user_message,
            assistant_message,
        }),
    ))
}
