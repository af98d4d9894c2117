//! Session-token authentication extractors for Axum handlers.

use std::convert::Infallible;
use std::sync::LazyLock;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use blockcopy_core::session::hash_token;
use blockcopy_core::types::DbId;
use blockcopy_db::models::user::User;
use blockcopy_db::repositories::SessionRepo;
use regex::Regex;

use crate::error::AppError;
use crate::state::AppState;

static BEARER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*Bearer\s+(\S+)\s*$").expect("static regex is valid"));

/// Token from an `Authorization: Bearer <token>` header.
///
/// The scheme is matched case-insensitively; anything else yields `None`.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    BEARER
        .captures(value)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Authenticated user resolved from a live session.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(auth: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = auth.id(), "handling request");
///     Ok(Json(()))
/// }
/// ```
///
/// Missing, malformed, unknown and expired tokens are all rejected with
/// the same 401.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
    /// SHA-256 hex of the presented token, identifying the session.
    pub token_hash: String,
}

impl AuthUser {
    pub fn id(&self) -> DbId {
        self.user.id
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or_else(AppError::unauthorized)?;
        let token_hash = hash_token(token);

        let user = SessionRepo::find_user_by_token_hash(&state.pool, &token_hash)
            .await?
            .ok_or_else(AppError::unauthorized)?;

        Ok(AuthUser { user, token_hash })
    }
}

/// The Bearer token of a request, without resolving the session.
#[derive(Debug, Clone)]
pub struct BearerToken(pub Option<String>);

impl<S: Send + Sync> FromRequestParts<S> for BearerToken {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(BearerToken(bearer_token(&parts.headers).map(str::to_string)))
    }
}
