//! Charset sniffing for pages handed over as raw bytes.
//!
//! Saved pages and proxied fetches often arrive as bytes in a legacy charset.
//! The declaration is read from the leading meta tags and the bytes are decoded
//! to UTF-8 before parsing.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Bytes inspected for a charset declaration.
const SNIFF_WINDOW: usize = 1024;

/// `<meta charset="...">` or the `charset=` parameter of an http-equiv content type.
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+?charset\s*=\s*["']?([A-Za-z0-9._:\-]+)"#).expect("valid regex")
});

/// Detect the declared encoding, defaulting to UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_WINDOW)]);
    declared_charset(&head)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

fn declared_charset(head: &str) -> Option<String> {
    META_CHARSET_RE
        .captures(head)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Decode HTML bytes to a UTF-8 string; malformed sequences become U+FFFD.
///
/// ```
/// use prsum::encoding::transcode_to_utf8;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
/// assert!(transcode_to_utf8(html).contains("Café"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }
    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_utf8_without_declaration() {
        assert_eq!(detect_encoding(b"<html><body>Test</body></html>"), UTF_8);
    }

    #[test]
    fn reads_meta_charset() {
        let html = br#"<html><head><meta charset="windows-1252"></head></html>"#;
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn reads_http_equiv_content_type() {
        let html = br#"<META HTTP-EQUIV="Content-Type" CONTENT="text/html; charset=ISO-8859-1">"#;
        // WHATWG maps ISO-8859-1 onto windows-1252
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn unknown_label_falls_back_to_utf8() {
        let html = br#"<meta charset="klingon-8">"#;
        assert_eq!(detect_encoding(html), UTF_8);
    }

    #[test]
    fn decodes_smart_quotes_from_windows1252() {
        let html = b"<meta charset=\"windows-1252\"><p>\x93Hello\x94</p>";
        assert!(transcode_to_utf8(html).contains("\u{201C}Hello\u{201D}"));
    }

    #[test]
    fn invalid_utf8_is_replaced_not_rejected() {
        let result = transcode_to_utf8(b"<p>Test \xFF\xFE ok</p>");
        assert!(result.contains("Test"));
        assert!(result.contains('\u{FFFD}'));
    }
}
