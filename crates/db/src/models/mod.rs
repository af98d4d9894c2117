//! Row models and input DTOs, one module per table.

pub mod block;
pub mod chat_message;
pub mod file;
pub mod project;
pub mod session;
pub mod start_section;
pub mod user;
