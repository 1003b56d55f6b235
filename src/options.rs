//! Budgets and caps for extraction and summarization.
//!
//! All lengths are in characters. `Default` carries the tuned values; override
//! individual fields with struct update syntax.

/// Configuration options for extraction, summarization and payload assembly.
///
/// # Example
///
/// ```rust
/// use prsum::Options;
///
/// let options = Options {
///     summary_max_chars: 800,
///     ..Options::default()
/// };
/// assert_eq!(options.max_code_blocks, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    // === Container selection ===
    /// Candidates with less readable text than this score zero.
    ///
    /// Default: `200`
    pub min_container_chars: usize,

    /// Block elements need more readable text than this to become candidates.
    ///
    /// Default: `400`
    pub min_block_candidate_chars: usize,

    // === Structured extraction ===
    /// Paragraphs must be longer than this to be kept.
    ///
    /// Default: `40`
    pub min_paragraph_chars: usize,

    /// Maximum number of lists kept.
    ///
    /// Default: `5`
    pub max_lists: usize,

    /// Maximum items kept per list.
    ///
    /// Default: `12`
    pub max_list_items: usize,

    /// Maximum number of code blocks kept.
    ///
    /// Default: `3`
    pub max_code_blocks: usize,

    /// Code blocks longer than this are cut and suffixed with `…`.
    ///
    /// Default: `1200`
    pub max_code_block_chars: usize,

    // === Summarization ===
    /// Sentence budget for page summaries when the caller gives none.
    ///
    /// Default: `1400`
    pub summary_max_chars: usize,

    /// Hard cap on selected sentences regardless of budget.
    ///
    /// Default: `24`
    pub max_summary_sentences: usize,

    /// Sentences shorter than this are never selected.
    ///
    /// Default: `40`
    pub min_sentence_chars: usize,

    /// Sentences with fewer tokens than this score zero.
    ///
    /// Default: `6`
    pub min_sentence_tokens: usize,

    // === Pull requests ===
    /// Requested budget for PR briefs when the caller gives none. Clamped to
    /// `800..=8000` at render time.
    ///
    /// Default: `2400`
    pub pr_max_chars: usize,

    /// Added lines scanned per file for property names.
    ///
    /// Default: `800`
    pub max_property_lines: usize,

    /// Property names longer than this are ignored.
    ///
    /// Default: `80`
    pub max_property_chars: usize,

    // === Raw payload ===
    /// Cap for the PR/MR region text.
    ///
    /// Default: `220_000`
    pub max_pr_raw_chars: usize,

    /// Cap for the whole-page visible text.
    ///
    /// Default: `120_000`
    pub max_raw_text_chars: usize,

    /// Cap for the whole-page markup.
    ///
    /// Default: `100_000`
    pub max_raw_html_chars: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_container_chars: 200,
            min_block_candidate_chars: 400,
            min_paragraph_chars: 40,
            max_lists: 5,
            max_list_items: 12,
            max_code_blocks: 3,
            max_code_block_chars: 1200,
            summary_max_chars: 1400,
            max_summary_sentences: 24,
            min_sentence_chars: 40,
            min_sentence_tokens: 6,
            pr_max_chars: 2400,
            max_property_lines: 800,
            max_property_chars: 80,
            max_pr_raw_chars: 220_000,
            max_raw_text_chars: 120_000,
            max_raw_html_chars: 100_000,
        }
    }
}
