//! Pull-request and merge-request extraction.
//!
//! Review pages are recognized from the URL path alone ([`detect`]). Their
//! diff markup is read through a per-platform selector table ([`platform`])
//! into a [`PrSnapshot`]: one [`PrFile`] per changed file with its added and
//! removed lines, totals, and the identifier names mined from added code
//! ([`properties`]). [`render`] turns a snapshot into a budgeted brief.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub mod detect;
pub mod extract;
pub mod platform;
pub mod properties;
pub mod render;

pub use detect::{detect_pr_context, Platform, PrContext};
pub use extract::extract_pr;
pub use platform::PlatformMarkup;
pub use properties::mine_properties;
pub use render::render_pr_summary;

/// Files kept by [`PrSnapshot::capped`].
pub const TRANSPORT_MAX_FILES: usize = 80;
/// Added lines per file kept by [`PrSnapshot::capped`].
pub const TRANSPORT_MAX_ADDED_LINES: usize = 400;
/// Removed lines per file kept by [`PrSnapshot::capped`].
pub const TRANSPORT_MAX_REMOVED_LINES: usize = 80;
/// Property names kept by [`PrSnapshot::capped`].
pub const TRANSPORT_MAX_PROPERTIES: usize = 200;

/// One changed file of a review.
///
/// `additions` and `deletions` always equal the line counts the file was
/// built from; [`PrSnapshot::capped`] may shorten the line vectors afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrFile {
    pub path: String,
    pub additions: usize,
    pub deletions: usize,
    pub added_lines: Vec<String>,
    pub removed_lines: Vec<String>,
}

impl PrFile {
    /// Build a file entry, deriving the counts from the line vectors.
    #[must_use]
    pub fn new(path: impl Into<String>, added_lines: Vec<String>, removed_lines: Vec<String>) -> Self {
        Self {
            path: path.into(),
            additions: added_lines.len(),
            deletions: removed_lines.len(),
            added_lines,
            removed_lines,
        }
    }
}

/// Line totals across all files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrTotals {
    pub add: usize,
    pub del: usize,
}

impl PrTotals {
    /// Elementwise sum of the files' counts.
    #[must_use]
    pub fn from_files(files: &[PrFile]) -> Self {
        files.iter().fold(Self::default(), |acc, file| Self {
            add: acc.add + file.additions,
            del: acc.del + file.deletions,
        })
    }
}

/// Everything extracted from one pull/merge-request page.
///
/// An empty `files` list means the page matched by URL but carried no diff
/// markup; treat it as low confidence rather than as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrSnapshot {
    pub title: String,
    pub description: String,
    pub author: String,
    pub base_branch: String,
    pub head_branch: String,
    /// `/owner/repo` prefix of the page path.
    pub repo_path: String,
    /// Page URL the snapshot was taken from.
    pub url: String,
    pub files: Vec<PrFile>,
    pub totals: PrTotals,
    /// Mined identifier names, sorted and case-sensitive.
    pub properties: BTreeSet<String>,
}

impl PrSnapshot {
    /// Copy trimmed to the transport limits.
    ///
    /// Per-file counts and `totals` still describe the whole review.
    #[must_use]
    pub fn capped(&self) -> Self {
        Self {
            title: self.title.clone(),
            description: self.description.clone(),
            author: self.author.clone(),
            base_branch: self.base_branch.clone(),
            head_branch: self.head_branch.clone(),
            repo_path: self.repo_path.clone(),
            url: self.url.clone(),
            totals: self.totals,
            files: self
                .files
                .iter()
                .take(TRANSPORT_MAX_FILES)
                .map(|file| PrFile {
                    path: file.path.clone(),
                    additions: file.additions,
                    deletions: file.deletions,
                    added_lines: file.added_lines.iter().take(TRANSPORT_MAX_ADDED_LINES).cloned().collect(),
                    removed_lines: file.removed_lines.iter().take(TRANSPORT_MAX_REMOVED_LINES).cloned().collect(),
                })
                .collect(),
            properties: self.properties.iter().take(TRANSPORT_MAX_PROPERTIES).cloned().collect(),
        }
    }
}
