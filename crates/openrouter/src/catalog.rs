//! Curated list of models suited to marketing copy.

use serde::Serialize;

/// Model used when neither the request nor the configuration names one.
pub const DEFAULT_MODEL: &str = "openai/gpt-4.5-preview";

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

const fn entry(id: &'static str, name: &'static str, description: &'static str) -> CatalogEntry {
    CatalogEntry {
        id,
        name,
        description,
    }
}

pub const MARKETING_MODELS: &[CatalogEntry] = &[
    // OpenAI
    entry("openai/gpt-4.5-preview", "GPT-4.5 Preview", "Latest OpenAI model, excellent for marketing copy"),
    entry("openai/gpt-4o", "GPT-4o", "Fast and strong for creative and marketing content"),
    entry("openai/gpt-4o-mini", "GPT-4o Mini", "Economical and fast for everyday tasks"),
    entry("openai/o3-mini", "o3 Mini", "Strong reasoning for complex content"),
    entry("openai/o1-mini", "o1 Mini", "Good for deep thinking and analysis"),
    // Anthropic
    entry("anthropic/claude-3.7-sonnet", "Claude 3.7 Sonnet", "Latest Claude, best for marketing content"),
    entry("anthropic/claude-3.5-sonnet", "Claude 3.5 Sonnet", "Excellent for creative and marketing content"),
    entry("anthropic/claude-3-opus", "Claude 3 Opus", "Strongest for complex content and strategy"),
    // Google
    entry("google/gemini-2.0-flash-001", "Gemini 2.0 Flash", "Fast, good for general content"),
    entry("google/gemini-2.0-pro-exp-02-05", "Gemini 2.0 Pro", "Excellent for marketing content"),
    entry("google/gemini-1.5-pro", "Gemini 1.5 Pro", "Good for long-form marketing content"),
    // Meta
    entry("meta-llama/llama-3.3-70b-instruct", "Llama 3.3 70B", "Strong for general content"),
    entry("meta-llama/llama-3.1-70b-instruct", "Llama 3.1 70B", "Good for marketing content"),
    // DeepSeek
    entry("deepseek/deepseek-chat", "DeepSeek V3", "Excellent for content and translation"),
    entry("deepseek/deepseek-r1", "DeepSeek R1", "Strong reasoning and analysis"),
    // Mistral
    entry("mistralai/mistral-large", "Mistral Large", "Excellent for multilingual content"),
];

/// Whether `id` is one of the curated models.
pub fn is_curated(id: &str) -> bool {
    MARKETING_MODELS.iter().any(|m| m.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_is_curated() {
        assert!(is_curated(DEFAULT_MODEL));
    }

    #[test]
    fn ids_are_provider_qualified() {
        for model in MARKETING_MODELS {
            assert!(model.id.contains('/'), "{} lacks a provider prefix", model.id);
        }
    }
}
