//! Domain layer for the BlockCopy backend.
//!
//! Pure validation and formatting rules shared by the database and API
//! crates, plus the provider traits for the external collaborators.

pub mod account;
pub mod block;
pub mod chat;
pub mod error;
pub mod file_kind;
pub mod project;
pub mod prompt;
pub mod provider;
pub mod session;
pub mod start_section;
pub mod types;
