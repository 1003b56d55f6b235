//! Identifier mining over added diff lines.
//!
//! Every rule in the [`Lexicon`] runs over every scanned line and each match
//! contributes one name. The rules over-match on purpose (a `word:` in a
//! comment counts), so the result is a suggestion list.

use std::collections::BTreeSet;

use crate::lexicon::Lexicon;
use crate::normalize::char_len;
use crate::options::Options;

use super::PrFile;

/// Names mined from the first `max_property_lines` added lines of each file.
///
/// Capture group 1 is the name; rules without one contribute the whole match.
/// Names longer than `max_property_chars` are dropped.
#[must_use]
pub fn mine_properties(files: &[PrFile], lexicon: &Lexicon, options: &Options) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    for file in files {
        for line in file.added_lines.iter().take(options.max_property_lines) {
            for pattern in lexicon.property_patterns() {
                for caps in pattern.captures_iter(line) {
                    let Some(name) = caps.get(1).or_else(|| caps.get(0)) else {
                        continue;
                    };
                    let name = name.as_str();
                    if !name.is_empty() && char_len(name) <= options.max_property_chars {
                        names.insert(name.to_string());
                    }
                }
            }
        }
    }
    names
}
