//! URL helpers: path segmentation and restricted-page detection.

/// Scheme prefixes of pages owned by the browser itself.
const RESTRICTED_PREFIXES: &[&str] = &[
    "chrome://",
    "edge://",
    "about:",
    "devtools://",
    "view-source:",
    "chrome-extension://",
    "moz-extension://",
    "opera://",
    "brave://",
    "vivaldi://",
];

/// Non-empty segments of a URL path, in order.
///
/// ```
/// use prsum::url_utils::path_segments;
///
/// assert_eq!(path_segments("/owner/repo/pull/7/"), vec!["owner", "repo", "pull", "7"]);
/// ```
#[must_use]
pub fn path_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}

/// `/owner/repo` prefix of a repository-scoped path.
#[must_use]
pub fn repo_path(path: &str) -> String {
    let segments = path_segments(path);
    format!("/{}", segments.iter().take(2).copied().collect::<Vec<_>>().join("/"))
}

/// True when every character is an ASCII digit and there is at least one.
#[must_use]
pub fn is_numeric_segment(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// Whether `url` points at a browser-internal page whose content cannot be read.
///
/// Matches browser schemes (`chrome://`, `about:` ...) and the extension web store.
#[must_use]
pub fn is_restricted_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }
    let lower = url.to_lowercase();
    RESTRICTED_PREFIXES.iter().any(|prefix| lower.starts_with(prefix))
        || lower.contains("chrome.google.com/webstore")
}
