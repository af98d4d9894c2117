//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Methods taking a `user_id`
//! are owner-scoped: rows belonging to other users behave as missing.

pub mod block_repo;
pub mod chat_message_repo;
pub mod file_repo;
pub mod project_repo;
pub mod session_repo;
pub mod start_section_repo;
pub mod user_repo;

pub use block_repo::BlockRepo;
pub use chat_message_repo::ChatMessageRepo;
pub use file_repo::FileRepo;
pub use project_repo::ProjectRepo;
pub use session_repo::SessionRepo;
pub use start_section_repo::StartSectionRepo;
pub use user_repo::UserRepo;
