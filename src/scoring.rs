//! Term-frequency sentence scoring for extractive summaries.
//!
//! Sentences are scored against a frequency table built over the whole base
//! text: each non-stopword token contributes its max-normalized frequency,
//! digit runs add a small bonus, and the sum is damped by the logarithm of the
//! sentence length so that dense, moderate-length sentences rank highest.

use std::collections::HashMap;

use crate::lexicon::Lexicon;
use crate::patterns::{DIGIT_RUN, WORD_TOKEN};

/// Bonus added per run of digits in a sentence.
const DIGIT_RUN_BONUS: f64 = 0.1;

/// Offset inside the length damping term `log2(8 + tokens)`.
const LENGTH_DAMPING_OFFSET: f64 = 8.0;

/// Case-folded word tokens of `text`.
///
/// A token is an ASCII letter followed by at least one letter, apostrophe or
/// hyphen, so single letters and numbers never count.
///
/// # Examples
///
/// ```
/// use prsum::scoring::tokenize;
///
/// assert_eq!(tokenize("Rust's self-hosted 2 x Compiler"), vec!["rust's", "self-hosted", "compiler"]);
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD_TOKEN
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Max-normalized term weights over non-stopword tokens.
///
/// The most frequent term weighs `1.0`; every other term weighs its count
/// divided by that maximum.
#[derive(Debug, Clone, Default)]
pub struct TermFrequencyTable {
    weights: HashMap<String, f64>,
}

impl TermFrequencyTable {
    /// Count the non-stopword tokens of `text` and normalize by the maximum.
    #[must_use]
    pub fn build(text: &str, lexicon: &Lexicon) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for token in tokenize(text) {
            if lexicon.is_stopword(&token) {
                continue;
            }
            *counts.entry(token).or_insert(0) += 1;
        }

        let max = counts.values().copied().max().unwrap_or(1).max(1) as f64;
        let weights = counts
            .into_iter()
            .map(|(term, count)| (term, count as f64 / max))
            .collect();
        Self { weights }
    }

    /// Weight of `term`, `0.0` when absent.
    #[inline]
    #[must_use]
    pub fn weight(&self, term: &str) -> f64 {
        self.weights.get(term).copied().unwrap_or(0.0)
    }

    /// Number of distinct terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// A sentence with its original position and score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSentence {
    /// Position in the split base text.
    pub index: usize,
    pub text: String,
    /// Always `>= 0`.
    pub score: f64,
}

/// Score one sentence against `table`.
///
/// Sentences with fewer than `min_tokens` tokens score `0`.
#[must_use]
pub fn score_sentence(sentence: &str, table: &TermFrequencyTable, lexicon: &Lexicon, min_tokens: usize) -> f64 {
    let tokens = tokenize(sentence);
    if tokens.len() < min_tokens {
        return 0.0;
    }

    let term_weight: f64 = tokens
        .iter()
        .filter(|token| !lexicon.is_stopword(token))
        .map(|token| table.weight(token))
        .sum();
    let digit_runs = DIGIT_RUN.find_iter(sentence).count() as f64;

    (term_weight + DIGIT_RUN_BONUS * digit_runs) / (LENGTH_DAMPING_OFFSET + tokens.len() as f64).log2()
}
