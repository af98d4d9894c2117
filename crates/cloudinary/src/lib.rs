//! Cloudinary upload client.
//!
//! Signed uploads and deletions against the Cloudinary REST API. Implements
//! the [`MediaStore`](blockcopy_core::provider::MediaStore) seam used by the
//! upload and file endpoints.

pub mod client;
pub mod signature;

pub use client::{CloudinaryClient, CloudinaryConfig, CloudinaryError};
