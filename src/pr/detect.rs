//! Review-page detection from the URL path.

use serde::{Deserialize, Serialize};

use crate::url_utils::{is_numeric_segment, path_segments};

/// Code-review platform a page belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    GitHub,
    GitLab,
}

/// Outcome of [`detect_pr_context`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrContext {
    /// Path looks like `/{owner}/{repo}/pull/{id}`.
    pub is_pr: bool,
    /// Path has a `merge_requests/{id}` pair.
    pub is_mr: bool,
}

impl PrContext {
    /// Whether the page is a pull or merge request.
    #[must_use]
    pub fn is_review(self) -> bool {
        self.is_pr || self.is_mr
    }

    /// Platform whose markup should be read; GitHub wins if both shapes match.
    #[must_use]
    pub fn platform(self) -> Option<Platform> {
        if self.is_pr {
            Some(Platform::GitHub)
        } else if self.is_mr {
            Some(Platform::GitLab)
        } else {
            None
        }
    }
}

/// Classify a location path as a pull request, a merge request, or neither.
///
/// Only the path shape is considered, never the host or the page content, so
/// self-hosted instances are recognized too. Trailing segments such as
/// `/files` or `/diffs` are allowed.
///
/// ```
/// use prsum::detect_pr_context;
///
/// assert!(detect_pr_context("/rust-lang/rust/pull/12345/files").is_pr);
/// assert!(detect_pr_context("/group/project/-/merge_requests/7").is_mr);
/// assert!(!detect_pr_context("/rust-lang/rust/issues/1").is_review());
/// ```
#[must_use]
pub fn detect_pr_context(path: &str) -> PrContext {
    let segments = path_segments(path);

    let is_pr = segments.len() >= 4 && segments[2] == "pull" && is_numeric_segment(segments[3]);

    // `/group/project/-/merge_requests/7` and `/group/project/merge_requests/7`
    // both put the id right after the first `merge_requests` segment.
    let is_mr = segments
        .iter()
        .position(|segment| *segment == "merge_requests")
        .and_then(|idx| segments.get(idx + 1))
        .is_some_and(|id| is_numeric_segment(id));

    PrContext { is_pr, is_mr }
}
