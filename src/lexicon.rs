//! Word lists and pattern tables used by the heuristics.
//!
//! A [`Lexicon`] is plain configuration data handed to the [`crate::Extractor`]
//! at construction. The default carries a trimmed English stopword list, the
//! boilerplate keywords used to drop paragraphs, and five property-mining
//! rules; tests and callers can substitute any of them.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;

/// Common English function words, excluded from term frequencies.
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "if", "while", "of", "at", "by", "for", "with",
    "about", "against", "between", "into", "through", "during", "before", "after", "above",
    "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under", "again",
    "further", "then", "once", "here", "there", "when", "where", "why", "how", "all", "any",
    "both", "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not",
    "only", "own", "same", "so", "than", "too", "very", "can", "will", "just", "don",
    "should", "now", "is", "am", "are", "was", "were", "be", "been", "being", "do", "does",
    "did", "having", "have", "has",
];

/// Paragraphs mentioning any of these (case-insensitive substring) are dropped.
///
/// This is a blunt filter: "terms" also matches "in terms of", "nav" matches
/// "canvas". The false positives are accepted.
pub const DEFAULT_BOILERPLATE_HINTS: &[&str] = &[
    "cookie", "consent", "subscribe", "newsletter", "advert", "promotion", "terms",
    "privacy", "sign up", "sign in", "login", "share", "related", "read more", "comments",
    "footer", "header", "nav", "banner", "policy",
];

/// Property-name mining rules applied to added diff lines. Group 1 is the name.
pub const DEFAULT_PROPERTY_PATTERNS: &[&str] = &[
    // "prop": / 'prop':
    r#"["']([A-Za-z_][A-Za-z0-9_\-]*)["']\s*:"#,
    // prop: value / prop: Type
    r"\b([A-Za-z_][A-Za-z0-9_]*)\s*:\s*[^:]",
    // class members, optionally with visibility / readonly
    r"(?:public|private|protected)?\s*(?:readonly\s*)?([A-Za-z_][A-Za-z0-9_]*)\s*[:=]",
    // self.attr =
    r"self\.([A-Za-z_][A-Za-z0-9_]*)\s*=",
    // CONSTANT_NAME =
    r"\b([A-Z][A-Z0-9_]+)\s*=",
];

#[allow(clippy::expect_used)]
static COMPILED_PROPERTY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    DEFAULT_PROPERTY_PATTERNS
        .iter()
        .map(|pattern| Regex::new(pattern).expect("DEFAULT_PROPERTY_PATTERNS regex"))
        .collect()
});

/// Stopwords, boilerplate hints and property-mining rules.
#[derive(Debug, Clone)]
pub struct Lexicon {
    stopwords: HashSet<String>,
    boilerplate_hints: Vec<String>,
    property_patterns: Vec<Regex>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            stopwords: DEFAULT_STOPWORDS.iter().map(|w| (*w).to_string()).collect(),
            boilerplate_hints: DEFAULT_BOILERPLATE_HINTS
                .iter()
                .map(|h| (*h).to_string())
                .collect(),
            property_patterns: COMPILED_PROPERTY_PATTERNS.clone(),
        }
    }
}

impl Lexicon {
    /// Replace the stopword set. Words are lowercased.
    #[must_use]
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stopwords = words.into_iter().map(|w| w.as_ref().to_lowercase()).collect();
        self
    }

    /// Replace the boilerplate hint list. Hints are lowercased.
    #[must_use]
    pub fn with_boilerplate_hints<I, S>(mut self, hints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.boilerplate_hints = hints.into_iter().map(|h| h.as_ref().to_lowercase()).collect();
        self
    }

    /// Replace the property-mining rules. Capture group 1 names the property;
    /// rules without a group contribute their whole match.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPattern`] if any pattern fails to compile.
    pub fn with_property_patterns<I, S>(mut self, patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.property_patterns = patterns
            .into_iter()
            .map(|p| Regex::new(p.as_ref()))
            .collect::<std::result::Result<_, _>>()?;
        Ok(self)
    }

    /// Whether `word` (already lowercased) is a stopword.
    #[inline]
    #[must_use]
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Whether `text` mentions any boilerplate hint.
    #[must_use]
    pub fn is_boilerplate(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.boilerplate_hints.iter().any(|hint| lower.contains(hint.as_str()))
    }

    /// Property-mining rules in application order.
    #[must_use]
    pub fn property_patterns(&self) -> &[Regex] {
        &self.property_patterns
    }
}
