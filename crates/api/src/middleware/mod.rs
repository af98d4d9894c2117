//! Request extractors for authentication.
//!
//! - [`auth::AuthUser`] -- Resolves the session behind a Bearer token.
//! - [`auth::BearerToken`] -- The raw Bearer token, if any (used by logout).

pub mod auth;
