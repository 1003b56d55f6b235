//! Extractive summarizer.
//!
//! The summary is built only from sentences already on the page:
//!
//! 1. Base text is the first three headings plus every kept paragraph.
//! 2. A [`TermFrequencyTable`] is built over the base text.
//! 3. The base text is split into sentences and each one is scored.
//! 4. Sentences are picked greedily by score within the character budget,
//!    then put back into document order.
//! 5. The brief adds a few list items and the first code block.
//!
//! The budget governs sentence selection only; header, list and code
//! sections are added on top of it.

use tracing::debug;

use crate::lexicon::Lexicon;
use crate::normalize::{char_len, clean_text};
use crate::options::Options;
use crate::patterns::SENTENCE_BOUNDARY;
use crate::result::StructuredContent;
use crate::scoring::{score_sentence, ScoredSentence, TermFrequencyTable};

/// Headings that lead the base text.
const BASE_HEADINGS: usize = 3;

/// Lists rendered under "Key items".
const KEY_ITEM_LISTS: usize = 2;

/// Items per list rendered under "Key items".
const KEY_ITEMS_PER_LIST: usize = 6;

/// Gate on the joined "Key items" bullets. A new item is checked without
/// its joining space, so the joined text may reach one character more.
const KEY_ITEMS_MAX_CHARS: usize = 600;

/// Split `text` into cleaned, non-empty sentences.
///
/// A break goes after `.`, `!` or `?` when followed by whitespace and an
/// upper-case letter or `[`. A literal `|` always breaks. Abbreviations such
/// as "U.S. Army" split too, and decimals like "1.5" never do.
///
/// ```
/// use prsum::summarize::split_sentences;
///
/// let parts = split_sentences("It works. Really! [1] see 1.5 notes | v2");
/// assert_eq!(parts, vec!["It works.", "Really!", "[1] see 1.5 notes", "v2"]);
/// ```
#[must_use]
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        // the punctuation mark is a single ASCII byte
        let end = boundary.start() + 1;
        sentences.push(&text[start..end]);
        start = end;
    }
    sentences.push(&text[start..]);

    sentences
        .into_iter()
        .flat_map(|part| part.split('|'))
        .map(clean_text)
        .filter(|s| !s.is_empty())
        .collect()
}

/// First headings and all paragraphs, joined into one text.
#[must_use]
pub fn base_text(structured: &StructuredContent) -> String {
    let headings = structured
        .headings
        .iter()
        .take(BASE_HEADINGS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(". ");
    let paragraphs = structured.paragraphs.join(" ");

    [headings, paragraphs]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(". ")
}

/// Score every sentence and order the positive ones by descending score.
///
/// The sort is stable, so equal scores keep document order.
#[must_use]
pub fn rank_sentences(
    sentences: &[String],
    table: &TermFrequencyTable,
    lexicon: &Lexicon,
    options: &Options,
) -> Vec<ScoredSentence> {
    let mut ranked: Vec<ScoredSentence> = sentences
        .iter()
        .enumerate()
        .map(|(index, text)| ScoredSentence {
            index,
            text: text.clone(),
            score: score_sentence(text, table, lexicon, options.min_sentence_tokens),
        })
        .filter(|s| s.score > 0.0)
        .collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

/// Greedy budgeted pick over `ranked`, returned in document order.
///
/// Each picked sentence costs its length plus one. Sentences that do not fit
/// are skipped, not fatal, so a shorter one further down can still be taken.
#[must_use]
pub fn select_sentences(ranked: &[ScoredSentence], budget: usize, options: &Options) -> Vec<ScoredSentence> {
    let mut picked: Vec<ScoredSentence> = Vec::new();
    let mut used = 0;
    for candidate in ranked {
        let len = char_len(&candidate.text);
        if len < options.min_sentence_chars {
            continue;
        }
        if picked.len() >= options.max_summary_sentences {
            break;
        }
        if used + len + 1 > budget {
            continue;
        }
        picked.push(candidate.clone());
        used += len + 1;
    }
    picked.sort_by_key(|s| s.index);
    picked
}

/// Sentences a summary of `structured` would carry, in document order.
#[must_use]
pub fn summary_sentences(
    structured: &StructuredContent,
    budget: usize,
    options: &Options,
    lexicon: &Lexicon,
) -> Vec<ScoredSentence> {
    let text = base_text(structured);
    let table = TermFrequencyTable::build(&text, lexicon);
    let sentences = split_sentences(&text);
    let ranked = rank_sentences(&sentences, &table, lexicon, options);
    let picked = select_sentences(&ranked, budget, options);

    debug!(
        terms = table.len(),
        sentences = sentences.len(),
        ranked = ranked.len(),
        picked = picked.len(),
        budget,
        "selected summary sentences"
    );
    picked
}

/// Render the bulleted brief for `structured`.
///
/// Empty content still yields the header and the `Summary:` label.
#[must_use]
pub fn summarize_structured(
    structured: &StructuredContent,
    budget: usize,
    options: &Options,
    lexicon: &Lexicon,
) -> String {
    let picked = summary_sentences(structured, budget, options, lexicon);

    let mut lines: Vec<String> = Vec::new();
    if !structured.title.is_empty() {
        lines.push(structured.title.clone());
    }
    lines.push(structured.url.clone());
    lines.push(String::new());
    lines.push("Summary:".to_string());
    lines.extend(picked.iter().map(|s| format!("- {}", s.text)));

    let key_items = key_item_bullets(&structured.lists);
    if !key_items.is_empty() {
        lines.push(String::new());
        lines.push("Key items:".to_string());
        lines.extend(key_items);
    }

    if let Some(code) = structured.code_blocks.first() {
        lines.push(format!("\nCode snippet:\n\"\"\"\n{code}\n\"\"\""));
    }

    lines.join("\n").trim().to_string()
}

fn key_item_bullets(lists: &[Vec<String>]) -> Vec<String> {
    let mut bullets: Vec<String> = Vec::new();
    let mut joined_len = 0;
    for list in lists.iter().take(KEY_ITEM_LISTS) {
        for item in list.iter().take(KEY_ITEMS_PER_LIST) {
            // joined_len is the bullets so far joined by single spaces
            if joined_len + char_len(item) + 2 > KEY_ITEMS_MAX_CHARS {
                break;
            }
            let bullet = format!("- {item}");
            joined_len += char_len(&bullet) + usize::from(!bullets.is_empty());
            bullets.push(bullet);
        }
    }
    bullets
}
