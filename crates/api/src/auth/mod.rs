//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//!
//! Session tokens are generated and hashed in `blockcopy_core::session`.

pub mod password;
