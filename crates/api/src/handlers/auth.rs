//! Handlers for the `/auth` resource (register, login, me, logout).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use blockcopy_core::account::{
    normalize_email, require_credentials, validate_email, validate_password,
};
use blockcopy_core::error::CoreError;
use blockcopy_core::session::{generate_token, hash_token};
use blockcopy_db::models::session::CreateSession;
use blockcopy_db::models::user::{CreateUser, User, UserResponse};
use blockcopy_db::repositories::{SessionRepo, UserRepo};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::middleware::auth::{AuthUser, BearerToken};
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    pub name: Option<String>,
    #[serde(default)]
    pub password: String,
    /// Issue a long-lived session.
    #[serde(default)]
    pub remember: bool,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub remember: bool,
}

/// Returned by register and login. `token` is shown exactly once.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    require_credentials(&input.email, &input.password)?;
    let email = normalize_email(&input.email);
    validate_email(&email)?;
    validate_password(&input.password)?;

    if UserRepo::email_exists(&state.pool, &email).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "User already exists".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let name = input
        .name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty());

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            email,
            name,
            password_hash,
        },
    )
    .await?;
    tracing::info!(user_id = user.id, "User registered");

    let response = start_session(&state, user, input.remember).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/v1/auth/login
///
/// Unknown email and wrong password produce the same 401.
pub async fn login(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    require_credentials(&input.email, &input.password)?;
    let email = normalize_email(&input.email);

    let invalid =
        || AppError::Core(CoreError::Unauthorized("Invalid email or password".into()));

    let user = UserRepo::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(invalid)?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(invalid());
    }

    let swept = SessionRepo::cleanup_expired(&state.pool).await?;
    if swept > 0 {
        tracing::debug!(swept, "Removed expired sessions");
    }

    let response = start_session(&state, user, input.remember).await?;
    tracing::info!(user_id = response.user.id, "User logged in");
    Ok(Json(response))
}

/// GET /api/v1/auth/me
pub async fn me(auth: AuthUser) -> Json<MeResponse> {
    Json(MeResponse {
        user: auth.user.into(),
    })
}

/// POST /api/v1/auth/logout
///
/// Ends the presented session only. Other sessions of the user stay valid.
pub async fn logout(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> AppResult<Json<MessageResponse>> {
    let token = token.ok_or_else(|| AppError::BadRequest("No token provided".into()))?;
    let removed = SessionRepo::delete_by_token_hash(&state.pool, &hash_token(&token)).await?;
    tracing::debug!(removed, "Logout");
    Ok(Json(MessageResponse::new("Logged out successfully")))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Issue a session token for `user` and build the response.
async fn start_session(state: &AppState, user: User, remember: bool) -> AppResult<AuthResponse> {
    let (token, token_hash) = generate_token();
    let expires_at = state.config.session.expires_at(Utc::now(), remember);

    SessionRepo::create(
        &state.pool,
        &CreateSession {
            user_id: user.id,
            token_hash,
            expires_at,
        },
    )
    .await?;

    Ok(AuthResponse {
        user: user.into(),
        token,
    })
}
