//! Snapshot extraction from review-page markup.

use tracing::debug;

use crate::dom::{PageDocument, PageNode};
use crate::lexicon::Lexicon;
use crate::normalize::clean_text;
use crate::options::Options;
use crate::patterns::BRANCH_OWNER_PREFIX;
use crate::selector::first_text;
use crate::url_utils::repo_path;

use super::detect::{detect_pr_context, Platform};
use super::platform::PlatformMarkup;
use super::properties::mine_properties;
use super::{PrFile, PrSnapshot, PrTotals};

/// Read a [`PrSnapshot`] from `doc`, whose location path is `path`.
///
/// The selector table follows the platform detected from `path`; paths that
/// are not review pages are read with the GitHub table. Missing markup
/// degrades to empty fields.
pub fn extract_pr<D: PageDocument>(doc: &D, path: &str, options: &Options, lexicon: &Lexicon) -> PrSnapshot {
    let platform = detect_pr_context(path).platform().unwrap_or(Platform::GitHub);
    let markup = PlatformMarkup::for_platform(platform);
    let root = doc.root();

    let (head_branch, base_branch) = branch_names(&root, markup);
    let files = extract_files(&root, markup);
    let totals = PrTotals::from_files(&files);
    let properties = mine_properties(&files, lexicon, options);

    debug!(
        ?platform,
        files = files.len(),
        additions = totals.add,
        deletions = totals.del,
        properties = properties.len(),
        "extracted review snapshot"
    );

    PrSnapshot {
        title: first_text(&root, markup.title),
        description: first_text(&root, markup.description),
        author: first_text(&root, markup.author),
        base_branch,
        head_branch,
        repo_path: repo_path(path),
        url: doc.url().to_string(),
        files,
        totals,
        properties,
    }
}

/// Head and base branch names from the first two branch labels.
fn branch_names<N: PageNode>(root: &N, markup: &PlatformMarkup) -> (String, String) {
    let refs = root.select_all(markup.branch_refs);
    if refs.len() < 2 {
        return (String::new(), String::new());
    }
    let name = |node: &N| {
        BRANCH_OWNER_PREFIX
            .replace(&clean_text(&node.text_content()), "")
            .into_owned()
    };
    (name(&refs[0]), name(&refs[1]))
}

/// One [`PrFile`] per file node that has a path.
fn extract_files<N: PageNode>(root: &N, markup: &PlatformMarkup) -> Vec<PrFile> {
    root.select_all(markup.files)
        .iter()
        .filter_map(|file| {
            let path = file_path(file, markup)?;
            let lines = |selector: &str| -> Vec<String> {
                file.select_all(selector)
                    .iter()
                    .map(|cell| clean_text(&cell.text_content()))
                    .collect()
            };
            Some(PrFile::new(path, lines(markup.added_lines), lines(markup.removed_lines)))
        })
        .collect()
}

/// Header text, else the header's path attribute, else the file's.
fn file_path<N: PageNode>(file: &N, markup: &PlatformMarkup) -> Option<String> {
    let from_info = file.select_first(markup.file_info).and_then(|info| {
        let text = clean_text(&info.text_content());
        if text.is_empty() {
            info.attr(markup.file_info_path_attr)
        } else {
            Some(text)
        }
    });

    from_info
        .filter(|path| !path.is_empty())
        .or_else(|| file.attr(markup.file_path_attr))
        .filter(|path| !path.is_empty())
}
