//! Selector tables for review-page markup.
//!
//! Field lists (`title`, `description`, `author`, raw regions) are fallback
//! lists: the first selector with a match wins. GitLab extraction selectors
//! follow the current merge-request diff view and are best effort.

use super::detect::Platform;

/// Where each piece of a review page lives in its markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformMarkup {
    pub title: &'static [&'static str],
    pub description: &'static [&'static str],
    pub author: &'static [&'static str],
    /// Branch labels, head first and base second.
    pub branch_refs: &'static str,
    /// One node per changed file.
    pub files: &'static str,
    /// File header inside a file node; its text is the path.
    pub file_info: &'static str,
    /// Attribute on the file header holding the path when its text is empty.
    pub file_info_path_attr: &'static str,
    /// Attribute on the file node holding the path as a last resort.
    pub file_path_attr: &'static str,
    /// Added line cells inside a file node.
    pub added_lines: &'static str,
    /// Removed line cells inside a file node.
    pub removed_lines: &'static str,
    /// Title and state header region.
    pub raw_meta: &'static [&'static str],
    /// Description and discussion region.
    pub raw_discussion: &'static [&'static str],
    /// Diff container region.
    pub raw_diff: &'static [&'static str],
}

pub const GITHUB: PlatformMarkup = PlatformMarkup {
    title: &["[data-test-selector=\"pull-request-title\"]", ".js-issue-title"],
    description: &[".comment-body"],
    author: &[".author"],
    branch_refs: ".commit-ref, .base-ref, .head-ref",
    files: ".file, .js-diff-progressive-container .file",
    file_info: ".file-info a, .file-info",
    file_info_path_attr: "title",
    file_path_attr: "data-path",
    added_lines: ".blob-code.blob-code-addition .blob-code-inner",
    removed_lines: ".blob-code.blob-code-deletion .blob-code-inner",
    raw_meta: &[".gh-header-show, .gh-header-meta"],
    raw_discussion: &[".discussion-timeline, .Layout-main"],
    raw_diff: &[
        "#files_bucket",
        ".js-diff-progressive-container",
        "[data-pjax=\"#files_bucket\"]",
    ],
};

pub const GITLAB: PlatformMarkup = PlatformMarkup {
    title: &[
        "[data-testid=\"title-content\"]",
        ".merge-request-details .title",
        ".detail-page-header .title",
        "h1.title",
    ],
    description: &[".detail-page-description .description", ".description .md"],
    author: &[".detail-page-header .author", ".author-link .author", ".author"],
    branch_refs: ".ref-container",
    files: ".diff-file",
    file_info: ".file-title-name",
    file_info_path_attr: "title",
    file_path_attr: "data-path",
    added_lines: ".line_content.new",
    removed_lines: ".line_content.old",
    raw_meta: &[".merge-request, .mr-title, .detail-page-description, header"],
    raw_discussion: &["#notes, .mr-notes, .discussion"],
    raw_diff: &["#diffs, .diffs"],
};

impl PlatformMarkup {
    /// Selector table for `platform`.
    #[must_use]
    pub fn for_platform(platform: Platform) -> &'static Self {
        match platform {
            Platform::GitHub => &GITHUB,
            Platform::GitLab => &GITLAB,
        }
    }

    /// Raw regions in the order they are gathered.
    #[must_use]
    pub fn raw_regions(&self) -> [&'static [&'static str]; 3] {
        [self.raw_meta, self.raw_discussion, self.raw_diff]
    }
}
