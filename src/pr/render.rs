//! Budgeted text brief for a [`PrSnapshot`].

use crate::normalize::{char_len, take_chars};

use super::PrSnapshot;

const MIN_BUDGET: usize = 800;
const MAX_BUDGET: usize = 8000;
/// Files listed by path and delta.
const MAX_LISTED_FILES: usize = 60;
/// Property names listed.
const MAX_LISTED_PROPERTIES: usize = 80;
/// Reserved for section labels and separators.
const SECTION_OVERHEAD: usize = 200;
/// Characters of added code one file may contribute.
const MAX_FILE_EXCERPT: usize = 1200;
/// Budget charged per excerpt on top of its slice and path.
const EXCERPT_OVERHEAD: usize = 10;
const MAX_EXCERPTS: usize = 12;

/// Render `pr` as a brief of header, file list, properties and added code.
///
/// `max_chars` is clamped to `800..=8000`. The header and lists are always
/// emitted; what remains of the budget after them goes to per-file excerpts
/// of added lines, at most 1200 characters and 12 files. Files whose added
/// lines are blank are skipped without spending budget.
///
/// `Files:` follows the header on the next line; the properties and added
/// code sections are each preceded by a blank line.
#[must_use]
pub fn render_pr_summary(pr: &PrSnapshot, max_chars: usize) -> String {
    let max_chars = max_chars.clamp(MIN_BUDGET, MAX_BUDGET);

    let header = header(pr);
    let files_list = pr
        .files
        .iter()
        .take(MAX_LISTED_FILES)
        .map(|f| format!("- {} (+{}/-{})", f.path, f.additions, f.deletions))
        .collect::<Vec<_>>()
        .join("\n");
    let properties = pr
        .properties
        .iter()
        .take(MAX_LISTED_PROPERTIES)
        .map(|p| format!("- {p}"))
        .collect::<Vec<_>>()
        .join("\n");

    let overhead = char_len(&header) + char_len(&files_list) + char_len(&properties) + SECTION_OVERHEAD;
    let mut budget = max_chars.saturating_sub(overhead);
    let mut excerpts: Vec<String> = Vec::new();
    for file in &pr.files {
        if budget == 0 {
            break;
        }
        let joined = file.added_lines.join("\n");
        let slice = take_chars(&joined, MAX_FILE_EXCERPT.min(budget));
        if slice.trim().is_empty() {
            continue;
        }
        excerpts.push(format!("File: {}\n\"\"\"\n{slice}\n\"\"\"", file.path));
        budget = budget.saturating_sub(char_len(slice) + char_len(&file.path) + EXCERPT_OVERHEAD);
        if excerpts.len() >= MAX_EXCERPTS {
            break;
        }
    }

    // the header runs straight into the file list
    let mut sections = if files_list.is_empty() {
        vec![format!("{header}\nFiles:")]
    } else {
        vec![format!("{header}\nFiles:\n{files_list}")]
    };
    if !properties.is_empty() {
        sections.push(format!("Properties:\n{properties}"));
    }
    if !excerpts.is_empty() {
        sections.push(format!("Added code:\n{}", excerpts.join("\n\n")));
    }
    sections.join("\n\n")
}

fn header(pr: &PrSnapshot) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(if pr.title.is_empty() { "(PR)".to_string() } else { pr.title.clone() });
    if !pr.url.is_empty() {
        lines.push(pr.url.clone());
    }
    if !pr.author.is_empty() {
        lines.push(format!("Author: {}", pr.author));
    }
    if !pr.head_branch.is_empty() || !pr.base_branch.is_empty() {
        let side = |name: &str| if name.is_empty() { "?".to_string() } else { name.to_string() };
        lines.push(format!("Branches: {} -> {}", side(&pr.head_branch), side(&pr.base_branch)));
    }
    lines.push(format!(
        "Files changed: {}, +{} -{}",
        pr.files.len(),
        pr.totals.add,
        pr.totals.del
    ));
    lines.join("\n")
}
