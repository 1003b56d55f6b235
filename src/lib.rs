//! # prsum
//!
//! Condense web pages and pull/merge requests into LLM-ready briefs.
//!
//! Given a rendered page, the library finds the container holding the main
//! content, decomposes it into headings, paragraphs, lists and code, and
//! produces a bounded extractive summary. Pull-request and merge-request
//! pages take a dedicated path: their diff markup is read file by file and
//! rendered as a budgeted brief of changed files, mined identifiers and
//! added code. For model-driven summaries, a capped raw payload and the
//! prompt built from it are available instead.
//!
//! ## Quick Start
//!
//! ```rust
//! use prsum::summarize_html;
//!
//! let html = r#"<html><head><title>Release Notes</title></head>
//! <body><article><h1>Overview</h1>
//! <p>The scheduler now balances work across 16 cores with far less contention than before.</p>
//! </article></body></html>"#;
//!
//! let brief = summarize_html(html, "https://example.com/releases")?;
//! assert!(brief.summary.starts_with("Release Notes\nhttps://example.com/releases"));
//! # Ok::<(), prsum::Error>(())
//! ```
//!
//! ## Pages from other trees
//!
//! Everything above runs on [`HtmlPage`], but the pipeline only needs the
//! [`PageDocument`] / [`PageNode`] traits. Implement them for a headless
//! browser bridge to get real computed styles and bounding boxes.

mod error;
mod options;
mod patterns;
mod result;

/// Document capability traits and the static-HTML implementation.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Visibility tests and text normalization.
pub mod normalize;

/// Stopwords, boilerplate hints and property-mining rules.
pub mod lexicon;

/// Selector query helpers and main-container selection.
pub mod selector;

/// Structured decomposition of the main container.
pub mod structured;

/// Term-frequency sentence scoring.
pub mod scoring;

/// Extractive summarizer.
pub mod summarize;

/// Pull/merge-request detection, extraction and rendering.
pub mod pr;

/// Capped raw payload for model-driven summaries.
pub mod raw;

/// Prompt construction for model-driven summaries.
pub mod prompt;

/// Stored user settings and engine resolution.
pub mod settings;

/// Bounded last-summary-per-URL history.
pub mod history;

/// URL helpers.
pub mod url_utils;

use tracing::debug;

// Public API - re-exports
pub use dom::{HtmlPage, PageDocument, PageNode};
pub use error::{Error, Result};
pub use history::SummaryHistory;
pub use lexicon::Lexicon;
pub use normalize::{clean_text, element_text, is_visible};
pub use options::Options;
pub use pr::{detect_pr_context, PrContext, PrFile, PrSnapshot, PrTotals};
pub use raw::{PayloadHint, RawPayload};
pub use result::{ExtractionStats, PageBrief, StructuredContent};
pub use settings::{Engine, Settings};

use normalize::char_len;

/// Extraction entry point holding the configuration every operation reads.
///
/// # Example
///
/// ```rust
/// use prsum::{Extractor, HtmlPage, Options};
///
/// let page = HtmlPage::new("<article><p>Short.</p></article>", "https://example.com/")?;
/// let extractor = Extractor::with_options(Options { summary_max_chars: 600, ..Options::default() });
/// let structured = extractor.extract_main_content(&page);
/// assert!(structured.paragraphs.is_empty());
/// # Ok::<(), prsum::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    options: Options,
    lexicon: Lexicon,
}

impl Extractor {
    #[must_use]
    pub fn new(options: Options, lexicon: Lexicon) -> Self {
        Self { options, lexicon }
    }

    /// Extractor with the default lexicon.
    #[must_use]
    pub fn with_options(options: Options) -> Self {
        Self::new(options, Lexicon::default())
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Select the main container of `doc` and decompose it.
    pub fn extract_main_content<D: PageDocument>(&self, doc: &D) -> StructuredContent {
        structured::extract_main_content(doc, &self.options, &self.lexicon)
    }

    /// Extractive brief of `structured`. `max_chars` defaults to
    /// `summary_max_chars` and bounds the selected sentences only.
    #[must_use]
    pub fn summarize_structured(&self, structured: &StructuredContent, max_chars: Option<usize>) -> String {
        let budget = max_chars.unwrap_or(self.options.summary_max_chars);
        summarize::summarize_structured(structured, budget, &self.options, &self.lexicon)
    }

    /// Review snapshot of `doc`, whose location path is `path`.
    pub fn extract_pr<D: PageDocument>(&self, doc: &D, path: &str) -> PrSnapshot {
        pr::extract_pr(doc, path, &self.options, &self.lexicon)
    }

    /// Budgeted brief of `snapshot`. `max_chars` defaults to `pr_max_chars`.
    #[must_use]
    pub fn render_pr_summary(&self, snapshot: &PrSnapshot, max_chars: Option<usize>) -> String {
        pr::render_pr_summary(snapshot, max_chars.unwrap_or(self.options.pr_max_chars))
    }

    /// Capped raw payload of `doc`, whose location path is `path`.
    pub fn build_raw_payload<D: PageDocument>(&self, doc: &D, path: &str) -> RawPayload {
        raw::build_raw_payload(doc, path, &self.options)
    }

    /// Local brief of `doc`: the review path on pull/merge requests, the
    /// extractive summarizer everywhere else.
    pub fn summarize_page<D: PageDocument>(&self, doc: &D, max_chars: Option<usize>) -> PageBrief {
        let path = doc.location_path();
        let url = doc.url().to_string();

        if detect_pr_context(&path).is_review() {
            let snapshot = self.extract_pr(doc, &path);
            let summary = self.render_pr_summary(&snapshot, max_chars);
            debug!(mode = "pr", files = snapshot.files.len(), chars = char_len(&summary), "summarized page");
            return PageBrief {
                title: snapshot.title.clone(),
                url,
                summary,
                stats: ExtractionStats {
                    full_text_len: char_len(&snapshot.description),
                    ..ExtractionStats::default()
                },
                pr: Some(snapshot),
            };
        }

        let structured = self.extract_main_content(doc);
        let summary = self.summarize_structured(&structured, max_chars);
        debug!(mode = "generic", chars = char_len(&summary), "summarized page");
        PageBrief {
            title: structured.title.clone(),
            url,
            summary,
            stats: structured.stats(),
            pr: None,
        }
    }
}

/// Parse `html` served from `url` and summarize it with default settings.
///
/// # Errors
///
/// Returns [`Error::RestrictedPage`] for browser-internal URLs and
/// [`Error::InvalidUrl`] when `url` does not parse.
pub fn summarize_html(html: &str, url: &str) -> Result<PageBrief> {
    let page = open_page(html, url)?;
    Ok(Extractor::default().summarize_page(&page, None))
}

/// Parse `html` served from `url` and assemble its raw payload.
///
/// # Errors
///
/// Returns [`Error::RestrictedPage`] for browser-internal URLs and
/// [`Error::InvalidUrl`] when `url` does not parse.
pub fn raw_payload_html(html: &str, url: &str) -> Result<RawPayload> {
    let page = open_page(html, url)?;
    Ok(Extractor::default().build_raw_payload(&page, page.path()))
}

fn open_page(html: &str, url: &str) -> Result<HtmlPage> {
    if url_utils::is_restricted_url(url) {
        return Err(Error::RestrictedPage(url.to_string()));
    }
    HtmlPage::new(html, url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restricted_pages_are_rejected() {
        let result = summarize_html("<p>x</p>", "chrome://settings");
        assert!(matches!(result, Err(Error::RestrictedPage(_))));
    }

    #[test]
    fn test_review_pages_take_the_pr_path() {
        let html = r#"<span class="js-issue-title">Tidy imports</span>
            <div class="file" data-path="src/lib.rs">
              <table><tr><td class="blob-code blob-code-addition"><span class="blob-code-inner">use std::fmt;</span></td></tr></table>
            </div>"#;
        let brief = match summarize_html(html, "https://github.com/o/r/pull/4") {
            Ok(brief) => brief,
            Err(err) => panic!("summary failed: {err}"),
        };

        assert_eq!(brief.title, "Tidy imports");
        assert!(brief.summary.starts_with("Tidy imports\nhttps://github.com/o/r/pull/4"));
        assert_eq!(brief.pr.as_ref().map(|pr| pr.files.len()), Some(1));
        assert_eq!(brief.stats.paragraphs, 0);
    }

    #[test]
    fn test_generic_pages_report_stats() {
        let html = "<html><head><title>Notes</title></head><body><article>\
            <h2>Intro</h2><p>A paragraph that is comfortably longer than forty characters.</p>\
            </article></body></html>";
        let brief = match summarize_html(html, "https://example.com/notes") {
            Ok(brief) => brief,
            Err(err) => panic!("summary failed: {err}"),
        };
        assert!(brief.pr.is_none());
        assert_eq!(brief.title, "Notes");
        assert_eq!(brief.stats.headings, 1);
        assert_eq!(brief.stats.paragraphs, 1);
    }

    #[test]
    fn test_raw_payload_html_hint() {
        let payload = raw_payload_html("<p>x</p>", "https://gitlab.com/g/p/-/merge_requests/2");
        assert_eq!(payload.map(|p| p.hint).ok(), Some(PayloadHint::Pr));
    }
}
