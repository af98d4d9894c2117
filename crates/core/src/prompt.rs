//! Prompt text sent to the language model.
//!
//! The model sees a plain-text summary of the project (details, the
//! start-section answers, and the attached files) ahead of every request.

use std::fmt::Write as _;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::file_kind::FILE_TYPE_TEXT;

/// Maximum characters of a text note quoted in the project context.
pub const NOTE_EXCERPT_CHARS: usize = 500;

const MISSING: &str = "not provided";

/// System prompt for free-form content generation.
pub const CONTENT_WRITER_PROMPT: &str = "You are a professional marketing copywriter. \
Write engaging, concise and effective content.";

/// System prompt for section suggestions.
pub const SECTION_PLANNER_PROMPT: &str = "You are an expert in website design and \
digital marketing. Suggest professional section names suited to the site. Return JSON only.";

/// Everything the model is told about a project.
#[derive(Debug, Clone, Default)]
pub struct ProjectContext {
    pub name: String,
    pub client_name: Option<String>,
    pub description: Option<String>,
    pub overview: Option<String>,
    pub ideal_client: Option<IdealClient>,
    pub understanding: Option<Understanding>,
    pub files: Vec<FileSummary>,
}

#[derive(Debug, Clone, Default)]
pub struct IdealClient {
    pub demographics: Option<String>,
    pub pain_points: Option<String>,
    pub goals: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Understanding {
    pub problem: Option<String>,
    pub solution: Option<String>,
    pub unique_value: Option<String>,
}

/// A file attached to the project.
#[derive(Debug, Clone)]
pub struct FileSummary {
    pub name: String,
    pub file_type: String,
    pub mime_type: Option<String>,
    pub content: Option<String>,
}

/// A proposed project block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockSuggestion {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

fn or_missing(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => MISSING,
    }
}

fn excerpt(text: &str) -> String {
    let mut out: String = text.chars().take(NOTE_EXCERPT_CHARS).collect();
    if text.chars().count() > NOTE_EXCERPT_CHARS {
        out.push_str("...");
    }
    out
}

impl ProjectContext {
    /// Render the project summary block.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let name = if self.name.trim().is_empty() {
            MISSING
        } else {
            &self.name
        };
        let _ = writeln!(out, "Project: \"{name}\"");
        out.push_str("\nProject details:\n");
        let _ = writeln!(out, "- Client: {}", or_missing(self.client_name.as_deref()));
        let _ = writeln!(out, "- Description: {}", or_missing(self.description.as_deref()));
        let _ = writeln!(out, "- Overview: {}", or_missing(self.overview.as_deref()));

        out.push_str("\nIdeal client:\n");
        match &self.ideal_client {
            Some(c) => {
                let _ = writeln!(out, "- Demographics: {}", or_missing(c.demographics.as_deref()));
                let _ = writeln!(out, "- Pain points: {}", or_missing(c.pain_points.as_deref()));
                let _ = writeln!(out, "- Goals: {}", or_missing(c.goals.as_deref()));
            }
            None => {
                let _ = writeln!(out, "{MISSING}");
            }
        }

        out.push_str("\nProject understanding:\n");
        match &self.understanding {
            Some(u) => {
                let _ = writeln!(out, "- Problem: {}", or_missing(u.problem.as_deref()));
                let _ = writeln!(out, "- Solution: {}", or_missing(u.solution.as_deref()));
                let _ = writeln!(out, "- Unique value: {}", or_missing(u.unique_value.as_deref()));
            }
            None => {
                let _ = writeln!(out, "{MISSING}");
            }
        }

        if !self.files.is_empty() {
            out.push_str("\nProject files:\n");
            for file in &self.files {
                if file.file_type == FILE_TYPE_TEXT {
                    let body = file.content.as_deref().unwrap_or_default();
                    let _ = writeln!(out, "- {}: {}", file.name, excerpt(body));
                } else {
                    let mime = file.mime_type.as_deref().unwrap_or("unknown type");
                    let _ = writeln!(out, "- {} ({mime})", file.name);
                }
            }
        }
        out
    }
}

/// System prompt for the project chat assistant.
pub fn chat_system_prompt(ctx: &ProjectContext) -> String {
    format!(
        "You are an assistant specialised in project management and digital marketing.\n\
         {}\n\
         Answer professionally and helpfully, using the project information in your answers. \
         Earlier conversation is included; reply to the latest message only.",
        ctx.render()
    )
}

/// Prepend the project summary to a user prompt.
pub fn with_project_context(ctx: &ProjectContext, prompt: &str) -> String {
    format!("{}\n{prompt}", ctx.render())
}

/// Prompt asking for block suggestions for a project.
pub fn suggest_blocks_prompt(ctx: &ProjectContext) -> String {
    format!(
        "{}\n\
         Task: based on the project information above, suggest 8-10 sections for a \
         website or campaign covering every part of the marketing pitch.\n\n\
         Sections should include:\n\
         - Hero section\n\
         - The problem / pain points\n\
         - The solution / product\n\
         - Features and benefits\n\
         - How it works\n\
         - Testimonials\n\
         - Pricing\n\
         - FAQ\n\
         - Call to action\n\
         - About the company / team\n\n\
         Return only a JSON list:\n\
         [\n  {{\"id\": \"hero\", \"title\": \"Hero Section\", \"description\": \"...\"}},\n  \
         {{\"id\": \"problem\", \"title\": \"Customer problem\", \"description\": \"...\"}}\n]",
        ctx.render()
    )
}

static JSON_ARRAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[\s\S]*\]").expect("static regex is valid"));

/// Extract block suggestions from a model reply.
///
/// Takes the outermost `[...]` span of the reply and parses it as a list of
/// suggestions. Returns `None` when there is no array or it does not parse,
/// or when it is empty.
pub fn parse_suggestions(reply: &str) -> Option<Vec<BlockSuggestion>> {
    let found = JSON_ARRAY.find(reply)?;
    let parsed: Vec<BlockSuggestion> = serde_json::from_str(found.as_str()).ok()?;
    if parsed.is_empty() {
        None
    } else {
        Some(parsed)
    }
}

/// Suggestions returned when the model reply cannot be used.
pub fn default_suggestions() -> Vec<BlockSuggestion> {
    [
        ("hero", "Hero Section", "Headline, sub-headline and primary call to action"),
        ("problem", "The Problem", "The pain points the ideal client faces"),
        ("solution", "The Solution", "How the product solves the problem"),
        ("benefits", "Benefits", "Key features and the outcomes they deliver"),
        ("how-it-works", "How It Works", "The process step by step"),
        ("testimonials", "Testimonials", "Reviews and social proof"),
        ("pricing", "Pricing", "Plans and what each includes"),
        ("faq", "FAQ", "Answers to common objections"),
        ("cta", "Call to Action", "Final push to convert"),
        ("about", "About Us", "The company and the team behind it"),
    ]
    .into_iter()
    .map(|(id, title, description)| BlockSuggestion {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProjectContext {
        ProjectContext {
            name: "Bakery launch".into(),
            client_name: Some("Crumb & Co".into()),
            description: None,
            overview: Some("Artisan bakery opening downtown".into()),
            ideal_client: Some(IdealClient {
                demographics: Some("Young professionals".into()),
                pain_points: None,
                goals: Some("Fresh bread before work".into()),
            }),
            understanding: None,
            files: vec![
                FileSummary {
                    name: "brief.pdf".into(),
                    file_type: "file".into(),
                    mime_type: Some("application/pdf".into()),
                    content: None,
                },
                FileSummary {
                    name: "notes".into(),
                    file_type: "text".into(),
                    mime_type: None,
                    content: Some("x".repeat(600)),
                },
            ],
        }
    }

    #[test]
    fn render_includes_known_fields_and_placeholders() {
        let text = sample().render();
        assert!(text.contains("Project: \"Bakery launch\""));
        assert!(text.contains("- Client: Crumb & Co"));
        assert!(text.contains("- Description: not provided"));
        assert!(text.contains("- Pain points: not provided"));
        assert!(text.contains("Project understanding:\nnot provided"));
        assert!(text.contains("- brief.pdf (application/pdf)"));
    }

    #[test]
    fn note_excerpts_are_truncated() {
        let text = sample().render();
        let line = text
            .lines()
            .find(|l| l.starts_with("- notes: "))
            .expect("note line present");
        assert_eq!(line.len(), "- notes: ".len() + NOTE_EXCERPT_CHARS + 3);
        assert!(line.ends_with("..."));
    }

    #[test]
    fn files_section_omitted_when_empty() {
        let ctx = ProjectContext {
            name: "Empty".into(),
            ..Default::default()
        };
        assert!(!ctx.render().contains("Project files:"));
    }

    #[test]
    fn suggestions_extracted_from_chatty_reply() {
        let reply = "Sure! Here you go:\n[{\"id\":\"hero\",\"title\":\"Hero\",\"description\":\"Top\"},\
                     {\"id\":\"faq\",\"title\":\"FAQ\"}]\nGood luck.";
        let parsed = parse_suggestions(reply).expect("should parse");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].title, "Hero");
        assert_eq!(parsed[1].description, "");
    }

    #[test]
    fn unusable_reply_yields_none() {
        assert!(parse_suggestions("no json here").is_none());
        assert!(parse_suggestions("[not json]").is_none());
        assert!(parse_suggestions("[]").is_none());
    }

    #[test]
    fn default_list_has_ten_sections() {
        let defaults = default_suggestions();
        assert_eq!(defaults.len(), 10);
        assert_eq!(defaults[0].id, "hero");
    }
}
