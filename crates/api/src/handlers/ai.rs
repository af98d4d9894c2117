//! Handlers for the `/ai` resource: model catalog, key check, free-form
//! generation and block suggestions.

use axum::extract::State;
use axum::Json;
use blockcopy_core::prompt::{
    default_suggestions, parse_suggestions, suggest_blocks_prompt, with_project_context,
    BlockSuggestion, CONTENT_WRITER_PROMPT, SECTION_PLANNER_PROMPT,
};
use blockcopy_core::provider::{ModelInfo, PromptMessage};
use blockcopy_core::types::DbId;
use blockcopy_openrouter::catalog::{DEFAULT_MODEL, MARKETING_MODELS};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, QueryParams};
use crate::handlers::context::load_project_context;
use crate::handlers::owned_project;
use crate::middleware::auth::AuthUser;
use crate::query::ProjectScope;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogModel {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub is_default: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub models: Vec<CatalogModel>,
    pub default_model: String,
}

#[derive(Debug, Serialize)]
pub struct AvailableModelsResponse {
    pub models: Vec<ModelInfo>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    /// Key to check; the server's own key when omitted.
    pub api_key: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub valid: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: String,
    pub system_prompt: Option<String>,
    pub model: Option<String>,
    /// When set, the project summary is prepended to the prompt.
    pub project_id: Option<DbId>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<BlockSuggestion>,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/ai/models
///
/// The curated list; available whether or not a key is configured.
pub async fn models(State(state): State<AppState>, _auth: AuthUser) -> Json<CatalogResponse> {
    let default_model = state
        .llm
        .as_ref()
        .map(|llm| llm.default_model().to_string())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let models = MARKETING_MODELS
        .iter()
        .map(|m| CatalogModel {
            id: m.id,
            name: m.name,
            description: m.description,
            is_default: m.id == default_model,
        })
        .collect();

    Json(CatalogResponse {
        models,
        default_model,
    })
}

/// GET /api/v1/ai/models/available
pub async fn available_models(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<AvailableModelsResponse>> {
    let models = state.llm()?.list_models().await?;
    Ok(Json(AvailableModelsResponse { models }))
}

/// POST /api/v1/ai/verify
pub async fn verify(
    State(state): State<AppState>,
    _auth: AuthUser,
    JsonBody(input): JsonBody<VerifyRequest>,
) -> AppResult<Json<VerifyResponse>> {
    let llm = state.llm()?;
    let valid = llm.verify_key(non_blank(input.api_key.as_deref())).await?;
    Ok(Json(VerifyResponse { valid }))
}

/// POST /api/v1/ai/generate
pub async fn generate(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(input): JsonBody<GenerateRequest>,
) -> AppResult<Json<GenerateResponse>> {
    if input.prompt.trim().is_empty() {
        return Err(AppError::BadRequest("Prompt is required".into()));
    }
    let llm = state.llm()?.clone();

    let prompt = match input.project_id {
        Some(project_id) => {
            let project = owned_project(&state, project_id, auth.id()).await?;
            let context = load_project_context(&state, &project).await?;
            with_project_context(&context, &input.prompt)
        }
        None => input.prompt.clone(),
    };

    let system = non_blank(input.system_prompt.as_deref()).unwrap_or(CONTENT_WRITER_PROMPT);
    let model = non_blank(input.model.as_deref()).unwrap_or_else(|| llm.default_model());

    let messages = [PromptMessage::system(system), PromptMessage::user(prompt)];
    let content = llm.complete(model, &messages).await?;
    Ok(Json(GenerateResponse { content }))
}

/// POST /api/v1/ai/suggest-blocks?projectId=
///
/// Falls back to the built-in suggestions when the reply holds no usable
/// JSON list.
pub async fn suggest_blocks(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(scope): QueryParams<ProjectScope>,
) -> AppResult<Json<SuggestionsResponse>> {
    let project = owned_project(&state, scope.require()?, auth.id()).await?;
    let llm = state.llm()?.clone();
    let context = load_project_context(&state, &project).await?;

    let messages = [
        PromptMessage::system(SECTION_PLANNER_PROMPT),
        PromptMessage::user(suggest_blocks_prompt(&context)),
    ];
    let reply = llm.complete(llm.default_model(), &messages).await?;

    let suggestions = parse_suggestions(&reply).unwrap_or_else(|| {
        tracing::warn!(project_id = project.id, "Unusable suggestion reply, using defaults");
        default_suggestions()
    });
    Ok(Json(SuggestionsResponse { suggestions }))
}
