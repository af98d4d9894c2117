//! Shared response types for API handlers.
//!
//! Resources are returned in named envelopes (`{ "project": ... }`,
//! `{ "blocks": [...] }`) built in each handler; the confirmation body
//! returned by deletes and logout lives here.

use serde::Serialize;

/// `{ "message": "..." }` confirmation body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
