//! Raw payload assembly for model-driven summarization.
//!
//! No scoring or filtering happens here. The payload carries the page's
//! visible text, its markup and, on review pages, the text of the review
//! regions, each capped independently.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dom::{PageDocument, PageNode};
use crate::normalize::{char_len, clean_text, take_chars};
use crate::options::Options;
use crate::pr::{detect_pr_context, PlatformMarkup};
use crate::selector::first_match;

/// Appended to a capped field. Counted within the cap.
pub const TRUNCATION_MARKER: &str = "\n…[truncated]";

/// Coarse page classification guiding the downstream prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadHint {
    /// Pull or merge request.
    Pr,
    #[default]
    Generic,
}

impl PayloadHint {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pr => "pr",
            Self::Generic => "generic",
        }
    }
}

impl fmt::Display for PayloadHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bounded raw text and markup of one page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPayload {
    pub title: String,
    pub url: String,
    pub hint: PayloadHint,
    /// Review-region text; empty for generic pages.
    pub pr_raw_text: String,
    /// Cleaned visible text of the body.
    pub raw_text: String,
    /// Markup of the whole document.
    #[serde(rename = "rawHTML")]
    pub raw_html: String,
}

impl RawPayload {
    /// One-line status string: title, mode and source sizes.
    ///
    /// ```
    /// use prsum::{PayloadHint, RawPayload};
    ///
    /// let payload = RawPayload { hint: PayloadHint::Pr, raw_text: "abc".into(), ..RawPayload::default() };
    /// assert_eq!(
    ///     payload.meta_line(),
    ///     "Title: (untitled)  •  Mode: pr  •  Source size: text 3 / html 0"
    /// );
    /// ```
    #[must_use]
    pub fn meta_line(&self) -> String {
        let title = if self.title.is_empty() { "(untitled)" } else { &self.title };
        format!(
            "Title: {title}  •  Mode: {}  •  Source size: text {} / html {}",
            self.hint,
            char_len(&self.raw_text),
            char_len(&self.raw_html)
        )
    }
}

/// Cut `text` to at most `max_chars` characters, marker included.
///
/// Text within the cap is returned unchanged. A cap shorter than the marker
/// keeps only the marker's first `max_chars` characters.
#[must_use]
pub fn cap_with_marker(text: &str, max_chars: usize) -> String {
    if char_len(text) <= max_chars {
        return text.to_string();
    }
    let marker_len = char_len(TRUNCATION_MARKER);
    if max_chars < marker_len {
        return take_chars(TRUNCATION_MARKER, max_chars).to_string();
    }
    format!("{}{TRUNCATION_MARKER}", take_chars(text, max_chars - marker_len))
}

/// Assemble the raw payload of `doc`, whose location path is `path`.
pub fn build_raw_payload<D: PageDocument>(doc: &D, path: &str, options: &Options) -> RawPayload {
    let context = detect_pr_context(path);
    let root = doc.root();

    let pr_raw_text = context
        .platform()
        .map(|platform| {
            PlatformMarkup::for_platform(platform)
                .raw_regions()
                .iter()
                .filter_map(|region| first_match(&root, region))
                .map(|node| node.inner_text())
                .filter(|text| !text.is_empty())
                .collect::<Vec<_>>()
                .join("\n\n")
        })
        .unwrap_or_default();
    let raw_text = clean_text(&doc.body().inner_text());
    let raw_html = root.outer_html();

    debug!(
        review = context.is_review(),
        pr_raw_chars = char_len(&pr_raw_text),
        raw_text_chars = char_len(&raw_text),
        raw_html_chars = char_len(&raw_html),
        "assembled raw payload"
    );

    RawPayload {
        title: clean_text(&doc.title()),
        url: doc.url().to_string(),
        hint: if context.is_review() { PayloadHint::Pr } else { PayloadHint::Generic },
        pr_raw_text: cap_with_marker(&pr_raw_text, options.max_pr_raw_chars),
        raw_text: cap_with_marker(&raw_text, options.max_raw_text_chars),
        raw_html: cap_with_marker(&raw_html, options.max_raw_html_chars),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::HtmlPage;

    fn page(html: &str, url: &str) -> HtmlPage {
        match HtmlPage::new(html, url) {
            Ok(page) => page,
            Err(err) => panic!("fixture page failed to parse: {err}"),
        }
    }

    #[test]
    fn test_cap_keeps_short_text() {
        assert_eq!(cap_with_marker("abc", 3), "abc");
        assert_eq!(cap_with_marker("", 0), "");
    }

    #[test]
    fn test_cap_includes_marker() {
        let capped = cap_with_marker(&"é".repeat(100), 50);
        assert_eq!(char_len(&capped), 50);
        assert!(capped.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn test_cap_below_marker_length() {
        let text = "x".repeat(40);
        assert_eq!(cap_with_marker(&text, 5), "\n…[tr");
        assert_eq!(cap_with_marker(&text, 0), "");
        assert_eq!(cap_with_marker(&text, 13), TRUNCATION_MARKER);
    }

    #[test]
    fn test_generic_page_payload() {
        let page = page(
            "<html><head><title> News </title></head><body><p>Hello   world</p></body></html>",
            "https://example.com/news",
        );
        let payload = build_raw_payload(&page, page.path(), &Options::default());

        assert_eq!(payload.title, "News");
        assert_eq!(payload.hint, PayloadHint::Generic);
        assert_eq!(payload.pr_raw_text, "");
        assert_eq!(payload.raw_text, "Hello world");
        assert!(payload.raw_html.starts_with("<html"));
    }

    #[test]
    fn test_github_regions_in_order() {
        let page = page(
            r#"<div id="files_bucket">DIFF</div>
               <div class="discussion-timeline">TALK</div>
               <div class="gh-header-show">HEAD</div>"#,
            "https://github.com/o/r/pull/3",
        );
        let payload = build_raw_payload(&page, page.path(), &Options::default());

        assert_eq!(payload.hint, PayloadHint::Pr);
        assert_eq!(payload.pr_raw_text, "HEAD\n\nTALK\n\nDIFF");
    }

    #[test]
    fn test_gitlab_regions() {
        let page = page(
            r#"<div class="merge-request">MR</div><div id="notes">NOTES</div><div class="diffs">CHANGES</div>"#,
            "https://gitlab.example.org/g/p/-/merge_requests/8",
        );
        let payload = build_raw_payload(&page, page.path(), &Options::default());
        assert_eq!(payload.pr_raw_text, "MR\n\nNOTES\n\nCHANGES");
    }

    #[test]
    fn test_caps_apply() {
        let body = "word ".repeat(100);
        let page = page(&format!("<p>{body}</p>"), "https://example.com/");
        let options = Options {
            max_raw_text_chars: 40,
            max_raw_html_chars: 60,
            ..Options::default()
        };
        let payload = build_raw_payload(&page, page.path(), &options);

        assert_eq!(char_len(&payload.raw_text), 40);
        assert!(payload.raw_text.ends_with(TRUNCATION_MARKER));
        assert_eq!(char_len(&payload.raw_html), 60);
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_string(&RawPayload::default()).unwrap_or_default();
        assert!(json.contains("\"prRawText\""));
        assert!(json.contains("\"rawHTML\""));
        assert!(json.contains("\"hint\":\"generic\""));
    }
}
