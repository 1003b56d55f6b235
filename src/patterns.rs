//! Compiled regex patterns and CSS selectors shared across the pipeline.
//!
//! All patterns are compiled once at first use via `LazyLock`. Lexicon data
//! that callers may want to swap (stopwords, boilerplate hints, property
//! rules) lives in [`crate::lexicon`] instead.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Text Normalization Patterns
// =============================================================================

/// Matches runs of whitespace for collapsing to a single space.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex"));

/// Matches zero-width spaces/joiners and the byte-order mark.
pub static ZERO_WIDTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x{200B}-\x{200D}\x{FEFF}]").expect("ZERO_WIDTH regex"));

// =============================================================================
// Summarizer Patterns
// =============================================================================

/// Word tokens: an ASCII letter followed by letters, apostrophes or hyphens.
///
/// Applied to lowercased text, so the upper-case range only matters for
/// callers tokenizing raw input.
pub static WORD_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z][a-zA-Z'\-]+").expect("WORD_TOKEN regex"));

/// Runs of ASCII digits, rewarded during sentence scoring.
pub static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("DIGIT_RUN regex"));

/// Sentence boundary: terminal punctuation, whitespace, then an upper-case
/// letter or an opening bracket. The break goes right after the punctuation.
pub static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+[A-Z\[]").expect("SENTENCE_BOUNDARY regex"));

// =============================================================================
// Pull Request Patterns
// =============================================================================

/// Leading `owner:` qualifier on branch labels (`octocat:feature-x`).
pub static BRANCH_OWNER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\w+:\s*").expect("BRANCH_OWNER_PREFIX regex"));

// =============================================================================
// CSS Selectors
// =============================================================================

/// Seed selectors for main-content candidates, in priority order.
pub const CONTENT_SEED_SELECTORS: &[&str] = &[
    "article",
    "main",
    "[role=\"main\"]",
    "#content",
    ".content",
    ".post",
    ".article",
    ".entry-content",
    ".post-content",
    ".article-body",
];

/// Block-level elements considered as large-text candidates.
pub const BLOCK_SELECTOR: &str = "div,section,article,main";

/// Descendants stripped before measuring an element's readable text.
pub const NON_CONTENT_SELECTOR: &str =
    "script,style,noscript,svg,canvas,iframe,button,input,select,textarea,form,aside,nav,footer,header";

/// Heading levels collected as structure.
pub const HEADING_SELECTOR: &str = "h1,h2,h3";

/// Paragraph nodes.
pub const PARAGRAPH_SELECTOR: &str = "p";

/// List containers.
pub const LIST_SELECTOR: &str = "ul,ol";

/// List items.
pub const LIST_ITEM_SELECTOR: &str = "li";

/// Preformatted and inline code nodes.
pub const CODE_SELECTOR: &str = "pre,code";
