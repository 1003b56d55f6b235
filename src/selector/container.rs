//! Main container selection.
//!
//! Candidates come from two sources: well-known content selectors (`article`,
//! `main`, `.post-content` ...) and any visible block element carrying a lot
//! of readable text. Each candidate is scored by text length, boosted by its
//! paragraph, heading and list counts; the best one wins and the body is the
//! fallback.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::dom::{PageDocument, PageNode};
use crate::normalize::{char_len, element_text, is_visible};
use crate::options::Options;
use crate::patterns::{
    BLOCK_SELECTOR, CONTENT_SEED_SELECTORS, HEADING_SELECTOR, LIST_SELECTOR, PARAGRAPH_SELECTOR,
};

/// A container candidate with its measured readable text.
#[derive(Clone)]
pub struct Candidate<N> {
    pub node: N,
    /// Characters of [`element_text`] for the node.
    pub text_chars: usize,
}

/// Gather container candidates in discovery order, de-duplicated by identity.
pub fn collect_candidates<'a, D: PageDocument>(doc: &'a D, options: &Options) -> Vec<Candidate<D::Node<'a>>> {
    let root = doc.root();
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();

    for selector in CONTENT_SEED_SELECTORS {
        for node in root.select_all(selector) {
            if seen.insert(node.node_id()) {
                let text_chars = char_len(&element_text(&node));
                candidates.push(Candidate { node, text_chars });
            }
        }
    }

    for node in root.select_all(BLOCK_SELECTOR) {
        if seen.contains(&node.node_id()) || !is_visible(&node) {
            continue;
        }
        let text_chars = char_len(&element_text(&node));
        if text_chars > options.min_block_candidate_chars {
            seen.insert(node.node_id());
            candidates.push(Candidate { node, text_chars });
        }
    }

    candidates
}

/// Content-density score of a node whose readable text is `text_chars` long.
///
/// `0` below `min_container_chars`, otherwise
/// `len * (1 + 0.02·paragraphs + 0.01·headings + 0.005·lists)`.
#[must_use]
pub fn score_container<N: PageNode>(node: &N, text_chars: usize, options: &Options) -> f64 {
    if text_chars < options.min_container_chars {
        return 0.0;
    }
    let paragraphs = node.select_all(PARAGRAPH_SELECTOR).len() as f64;
    let headings = node.select_all(HEADING_SELECTOR).len() as f64;
    let lists = node.select_all(LIST_SELECTOR).len() as f64;
    text_chars as f64 * (1.0 + 0.02 * paragraphs + 0.01 * headings + 0.005 * lists)
}

/// Pick the node most likely to hold the page's primary content.
///
/// Ties keep the first candidate discovered. Falls back to the body when no
/// candidate scores above zero, so a usable node is always returned.
pub fn select_main_container<'a, D: PageDocument>(doc: &'a D, options: &Options) -> D::Node<'a> {
    let candidates = collect_candidates(doc, options);

    let mut best: Option<D::Node<'a>> = None;
    let mut best_score = 0.0;
    for candidate in &candidates {
        let score = score_container(&candidate.node, candidate.text_chars, options);
        trace!(
            tag = candidate.node.tag_name().as_deref().unwrap_or(""),
            text_chars = candidate.text_chars,
            score,
            "scored container candidate"
        );
        if score > best_score {
            best_score = score;
            best = Some(candidate.node.clone());
        }
    }

    debug!(candidates = candidates.len(), best_score, fallback = best.is_none(), "selected main container");
    best.unwrap_or_else(|| doc.body())
}
