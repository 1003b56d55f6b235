//! Selector Infrastructure
//!
//! Helpers for querying a [`PageNode`] tree with CSS selector lists: first
//! match across an ordered fallback list, identity-deduplicated unions, and
//! predicate queries. Main-container selection lives in [`container`].

use std::collections::HashSet;

use crate::dom::PageNode;
use crate::normalize::clean_text;

pub mod container;

/// First node matching any selector, trying the selectors in order.
///
/// Earlier selectors win even when a later one matches an earlier node in the
/// document, which is what fallback lists ("preferred markup, then legacy
/// markup") need.
#[must_use]
pub fn first_match<N: PageNode>(root: &N, selectors: &[&str]) -> Option<N> {
    selectors.iter().find_map(|selector| root.select_first(selector))
}

/// Cleaned `textContent` of the first node matched by the fallback list, or
/// an empty string.
#[must_use]
pub fn first_text<N: PageNode>(root: &N, selectors: &[&str]) -> String {
    first_match(root, selectors)
        .map(|node| clean_text(&node.text_content()))
        .unwrap_or_default()
}

/// All nodes matched by any selector, de-duplicated by identity, grouped by
/// selector in list order.
#[must_use]
pub fn union_all<N: PageNode>(root: &N, selectors: &[&str]) -> Vec<N> {
    let mut seen = HashSet::new();
    let mut nodes = Vec::new();
    for selector in selectors {
        for node in root.select_all(selector) {
            if seen.insert(node.node_id()) {
                nodes.push(node);
            }
        }
    }
    nodes
}

/// Nodes matching `selector` for which `rule` holds, in document order.
#[must_use]
pub fn query_all<N, F>(root: &N, selector: &str, rule: F) -> Vec<N>
where
    N: PageNode,
    F: Fn(&N) -> bool,
{
    root.select_all(selector).into_iter().filter(|node| rule(node)).collect()
}
