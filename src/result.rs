//! Result types for extraction output.
//!
//! This module defines the structured decomposition of a page and the brief
//! handed back to callers, along with the transport caps applied before a
//! value crosses a process or message boundary.

use serde::{Deserialize, Serialize};

use crate::normalize::{char_len, take_chars};
use crate::pr::PrSnapshot;

/// Paragraphs kept by [`StructuredContent::capped`].
pub const TRANSPORT_MAX_PARAGRAPHS: usize = 40;
/// Lists kept by [`StructuredContent::capped`].
pub const TRANSPORT_MAX_LISTS: usize = 3;
/// Items per list kept by [`StructuredContent::capped`].
pub const TRANSPORT_MAX_LIST_ITEMS: usize = 10;
/// Code blocks kept by [`StructuredContent::capped`].
pub const TRANSPORT_MAX_CODE_BLOCKS: usize = 2;
/// Full-text characters kept by [`StructuredContent::capped`] before the `…`.
pub const TRANSPORT_MAX_FULL_TEXT: usize = 12_000;

/// Structured decomposition of the main container of a page.
///
/// Built fresh per extraction call; every field is already cleaned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredContent {
    /// Cleaned document title.
    pub title: String,

    /// Page URL.
    pub url: String,

    /// Non-empty `h1`–`h3` texts in document order.
    pub headings: Vec<String>,

    /// Paragraphs longer than the minimum that mention no boilerplate hint.
    pub paragraphs: Vec<String>,

    /// Up to 5 non-empty lists of up to 12 items each.
    pub lists: Vec<Vec<String>>,

    /// Up to 3 code texts, each cut to 1200 characters plus `…`.
    pub code_blocks: Vec<String>,

    /// Readable text of the whole container.
    pub full_text: String,
}

impl StructuredContent {
    /// Copy with paragraphs, lists, code and full text trimmed to the
    /// transport limits.
    #[must_use]
    pub fn capped(&self) -> Self {
        let full_text = if char_len(&self.full_text) > TRANSPORT_MAX_FULL_TEXT {
            format!("{}…", take_chars(&self.full_text, TRANSPORT_MAX_FULL_TEXT))
        } else {
            self.full_text.clone()
        };

        Self {
            title: self.title.clone(),
            url: self.url.clone(),
            headings: self.headings.clone(),
            paragraphs: self.paragraphs.iter().take(TRANSPORT_MAX_PARAGRAPHS).cloned().collect(),
            lists: self
                .lists
                .iter()
                .take(TRANSPORT_MAX_LISTS)
                .map(|list| list.iter().take(TRANSPORT_MAX_LIST_ITEMS).cloned().collect())
                .collect(),
            code_blocks: self.code_blocks.iter().take(TRANSPORT_MAX_CODE_BLOCKS).cloned().collect(),
            full_text,
        }
    }

    /// Counts describing how much structure was found.
    #[must_use]
    pub fn stats(&self) -> ExtractionStats {
        ExtractionStats {
            headings: self.headings.len(),
            paragraphs: self.paragraphs.len(),
            lists: self.lists.len(),
            code_blocks: self.code_blocks.len(),
            full_text_len: char_len(&self.full_text),
        }
    }
}

/// How much structure an extraction produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionStats {
    pub headings: usize,
    pub paragraphs: usize,
    pub lists: usize,
    pub code_blocks: usize,
    /// Characters of full text (the PR description for PR pages).
    pub full_text_len: usize,
}

/// A locally computed brief for one page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageBrief {
    /// Cleaned title (the PR title on PR pages).
    pub title: String,

    /// Page URL.
    pub url: String,

    /// Rendered summary text.
    pub summary: String,

    /// Structure counts behind the summary.
    pub stats: ExtractionStats,

    /// The PR snapshot, when the page is a pull/merge request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pr: Option<PrSnapshot>,
}
