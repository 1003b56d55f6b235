//! Visibility tests and text normalization.

use crate::dom::PageNode;
use crate::patterns::{NON_CONTENT_SELECTOR, WHITESPACE_NORMALIZE, ZERO_WIDTH};

/// Whether `node` is rendered and visible.
///
/// False for non-elements, for `display: none`, `visibility: hidden`,
/// `opacity: 0`, and for elements whose known bounding box has zero width or
/// height. An unknown bounding box counts as visible.
#[must_use]
pub fn is_visible<N: PageNode>(node: &N) -> bool {
    if !node.is_element() {
        return false;
    }
    let style = node.computed_style();
    if style.display.as_deref() == Some("none")
        || style.visibility.as_deref() == Some("hidden")
        || style.opacity.as_deref() == Some("0")
    {
        return false;
    }
    match node.bounding_box() {
        Some(rect) => rect.width > 0.0 && rect.height > 0.0,
        None => true,
    }
}

/// Collapse whitespace runs to one space, drop zero-width characters and trim.
///
/// Zero-width characters are removed before collapsing so that a space on
/// either side of one cannot survive as a double space; this keeps the
/// function idempotent.
///
/// ```
/// use prsum::clean_text;
///
/// assert_eq!(clean_text("  Hello\u{200B}\n\t world  "), "Hello world");
/// ```
#[must_use]
pub fn clean_text(s: &str) -> String {
    let without_zero_width = ZERO_WIDTH.replace_all(s, "");
    WHITESPACE_NORMALIZE
        .replace_all(&without_zero_width, " ")
        .trim()
        .to_string()
}

/// Readable text of an element: scripts, styles, forms, media embeds and
/// page chrome (`nav`, `aside`, `header`, `footer`) are left out.
#[must_use]
pub fn element_text<N: PageNode>(node: &N) -> String {
    clean_text(&node.text_excluding(NON_CONTENT_SELECTOR))
}

/// Length in characters, as used by every budget and threshold.
#[inline]
#[must_use]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// First `max` characters of `s`.
#[must_use]
pub fn take_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
