//! Prompt construction for model-driven summaries.
//!
//! The calling layer sends a [`PromptRequest`] (or [`SYSTEM_PROMPT`] plus
//! the output of [`build_prompt`]) to the configured engine; this crate never
//! performs the request itself.

use serde::Serialize;

use crate::normalize::take_chars;
use crate::raw::{PayloadHint, RawPayload};
use crate::settings::{Engine, Settings};

/// System message accompanying every prompt.
pub const SYSTEM_PROMPT: &str = "You are a precise summarizer for LLM context preparation.";

/// Sampling temperature the prompts are written for.
pub const SUMMARY_TEMPERATURE: f32 = 0.2;

/// Built-in instructions for pull and merge requests.
pub const DEFAULT_PR_INSTRUCTIONS: &str = "\
Summarize this GitHub Pull Request for replication by another LLM. Do not output JSON or YAML.
Use only human-readable sections with headings and bullet points.
Sections (in order):
1) Summary: high-level what changed and why; note feature flags or config additions.
2) Files Changed: list each file path with a one-line purpose.
3) Added Code: for each file, include essential added lines in fenced code blocks.
4) Removed Code: include only removed lines that are important to understand the change.
Rules: Do not invent code; copy exact lines from the diff. Preserve identifiers, endpoints, constants, versions.
Keep it concise but sufficient for another LLM to reproduce the change elsewhere.";

/// Built-in instructions for ordinary pages.
pub const DEFAULT_PAGE_INSTRUCTIONS: &str = "\
Extract the main content and provide a precise, LLM-ready brief. Use headings and bullet points.
Keep only important facts, entities, numbers, definitions, and steps.
Do not output JSON or YAML. Use plain text and bullets.";

/// Review text carried in a prompt.
const MAX_PR_BODY: usize = 240_000;
/// Page text carried in a prompt.
const MAX_PAGE_BODY: usize = 120_000;

/// User overrides for the built-in instructions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PromptTemplates<'a> {
    pub pr_instructions: Option<&'a str>,
    pub page_instructions: Option<&'a str>,
}

/// Format `raw` into the user prompt.
///
/// Review payloads use the PR layout with the review text (or the page text
/// when no region was found); other pages use the page layout. A positive
/// `max_chars` adds a target length, clamped to `600..=6000` for reviews and
/// `400..=5000` for pages.
///
/// ```
/// use prsum::prompt::{build_prompt, PromptTemplates};
/// use prsum::RawPayload;
///
/// let raw = RawPayload { title: "Docs".into(), raw_text: "Body".into(), ..RawPayload::default() };
/// let prompt = build_prompt(&raw, Some(100), &PromptTemplates::default());
/// assert!(prompt.starts_with("Title: Docs\nURL: \n\n"));
/// assert!(prompt.contains("Target length: ~400 characters."));
/// assert!(prompt.ends_with("RAW PAGE TEXT START\nBody\nRAW PAGE TEXT END"));
/// ```
#[must_use]
pub fn build_prompt(raw: &RawPayload, max_chars: Option<usize>, templates: &PromptTemplates<'_>) -> String {
    let title = if raw.title.is_empty() { "(untitled)" } else { raw.title.as_str() };
    let target = max_chars.filter(|&n| n > 0);

    match raw.hint {
        PayloadHint::Pr => {
            let text = if raw.pr_raw_text.is_empty() { &raw.raw_text } else { &raw.pr_raw_text };
            let mut instructions = templates.pr_instructions.unwrap_or(DEFAULT_PR_INSTRUCTIONS).to_string();
            if let Some(n) = target {
                instructions.push_str(&format!(
                    "\nTarget length: ~{} characters. Use bullet points and terse phrasing.",
                    n.clamp(600, 6000)
                ));
            }
            layout(
                &format!("PR Title: {title}"),
                &raw.url,
                &instructions,
                "RAW PR TEXT",
                take_chars(text, MAX_PR_BODY),
            )
        }
        PayloadHint::Generic => {
            let mut instructions = templates.page_instructions.unwrap_or(DEFAULT_PAGE_INSTRUCTIONS).to_string();
            if let Some(n) = target {
                instructions.push_str(&format!("\nTarget length: ~{} characters.", n.clamp(400, 5000)));
            }
            layout(
                &format!("Title: {title}"),
                &raw.url,
                &instructions,
                "RAW PAGE TEXT",
                take_chars(&raw.raw_text, MAX_PAGE_BODY),
            )
        }
    }
}

/// Everything needed to call a summarization engine, minus the API key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptRequest {
    pub engine: Engine,
    pub model: String,
    pub system: &'static str,
    pub prompt: String,
    pub temperature: f32,
}

/// Resolve engine and model from `settings` and build the prompt for `raw`.
#[must_use]
pub fn build_request(
    raw: &RawPayload,
    max_chars: Option<usize>,
    settings: &Settings,
    requested: Option<Engine>,
) -> PromptRequest {
    let engine = settings.resolve_engine(requested);
    PromptRequest {
        engine,
        model: settings.model_for(engine).to_string(),
        system: SYSTEM_PROMPT,
        prompt: build_prompt(raw, max_chars, &settings.templates()),
        temperature: SUMMARY_TEMPERATURE,
    }
}

fn layout(title_line: &str, url: &str, instructions: &str, fence: &str, body: &str) -> String {
    let url_line = format!("URL: {url}");
    let start = format!("{fence} START");
    let end = format!("{fence} END");
    [title_line, url_line.as_str(), "", instructions, "", start.as_str(), body, end.as_str()].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(pr_text: &str, page_text: &str) -> RawPayload {
        RawPayload {
            title: "Fix race".into(),
            url: "https://github.com/o/r/pull/1".into(),
            hint: PayloadHint::Pr,
            pr_raw_text: pr_text.into(),
            raw_text: page_text.into(),
            ..RawPayload::default()
        }
    }

    #[test]
    fn test_review_prompt_layout() {
        let prompt = build_prompt(&review("DIFF", "PAGE"), None, &PromptTemplates::default());

        assert!(prompt.starts_with("PR Title: Fix race\nURL: https://github.com/o/r/pull/1\n\nSummarize this GitHub Pull Request"));
        assert!(prompt.ends_with("\n\nRAW PR TEXT START\nDIFF\nRAW PR TEXT END"));
        assert!(!prompt.contains("Target length"));
    }

    #[test]
    fn test_review_prompt_falls_back_to_page_text() {
        let prompt = build_prompt(&review("", "PAGE"), None, &PromptTemplates::default());
        assert!(prompt.contains("RAW PR TEXT START\nPAGE\nRAW PR TEXT END"));
    }

    #[test]
    fn test_target_length_is_clamped() {
        let raw = review("DIFF", "");
        let high = build_prompt(&raw, Some(50_000), &PromptTemplates::default());
        assert!(high.contains("Target length: ~6000 characters. Use bullet points and terse phrasing."));
        let low = build_prompt(&raw, Some(10), &PromptTemplates::default());
        assert!(low.contains("Target length: ~600 characters."));
        let zero = build_prompt(&raw, Some(0), &PromptTemplates::default());
        assert!(!zero.contains("Target length"));

        let page = RawPayload::default();
        assert!(build_prompt(&page, Some(9000), &PromptTemplates::default()).contains("~5000 characters."));
    }

    #[test]
    fn test_custom_instructions_replace_defaults() {
        let templates = PromptTemplates {
            pr_instructions: Some("List files only."),
            page_instructions: None,
        };
        let prompt = build_prompt(&review("DIFF", ""), Some(1000), &templates);
        assert!(prompt.contains("\n\nList files only.\nTarget length: ~1000 characters."));
        assert!(!prompt.contains("Sections (in order)"));
    }

    #[test]
    fn test_request_carries_engine_model_and_temperature() {
        let settings = Settings {
            last_engine: Some(Engine::Gemini),
            page_instructions: Some("Only list numbers.".into()),
            ..Settings::default()
        };
        let raw = RawPayload { title: "Docs".into(), raw_text: "Body".into(), ..RawPayload::default() };
        let request = build_request(&raw, None, &settings, None);

        assert_eq!(request.engine, Engine::Gemini);
        assert_eq!(request.model, crate::settings::DEFAULT_GEMINI_MODEL);
        assert_eq!(request.system, SYSTEM_PROMPT);
        assert!(request.prompt.contains("\n\nOnly list numbers.\n\n"));
        assert!((request.temperature - 0.2).abs() < f32::EPSILON);

        let json = serde_json::to_string(&request).unwrap_or_default();
        assert!(json.contains("\"engine\":\"gemini\""));
        assert!(json.contains("\"temperature\":0.2"));

        let forced = build_request(&raw, None, &settings, Some(Engine::ChatGpt));
        assert_eq!(forced.model, crate::settings::DEFAULT_OPENAI_MODEL);
    }

    #[test]
    fn test_body_is_capped() {
        let raw = RawPayload {
            raw_text: "p".repeat(130_000),
            ..RawPayload::default()
        };
        let prompt = build_prompt(&raw, None, &PromptTemplates::default());
        assert!(prompt.contains(&"p".repeat(120_000)));
        assert!(!prompt.contains(&"p".repeat(120_001)));
        assert!(prompt.starts_with("Title: (untitled)"));
    }
}
