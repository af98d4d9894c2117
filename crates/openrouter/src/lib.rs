//! OpenRouter REST client.
//!
//! Wraps the OpenRouter chat-completion, model listing, and key check
//! endpoints using [`reqwest`], and implements the
//! [`LanguageModel`](blockcopy_core::provider::LanguageModel) seam.

pub mod catalog;
pub mod client;
pub mod messages;

pub use client::{OpenRouterClient, OpenRouterConfig, OpenRouterError};
