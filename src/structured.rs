//! Structured decomposition of the main container.

use tracing::debug;

use crate::dom::{PageDocument, PageNode};
use crate::lexicon::Lexicon;
use crate::normalize::{char_len, clean_text, element_text, take_chars};
use crate::options::Options;
use crate::patterns::{CODE_SELECTOR, HEADING_SELECTOR, LIST_ITEM_SELECTOR, LIST_SELECTOR, PARAGRAPH_SELECTOR};
use crate::result::StructuredContent;
use crate::selector::container::select_main_container;

/// Select the main container of `doc` and decompose it.
pub fn extract_main_content<D: PageDocument>(doc: &D, options: &Options, lexicon: &Lexicon) -> StructuredContent {
    let container = select_main_container(doc, options);
    extract_structured(&container, &doc.title(), doc.url(), options, lexicon)
}

/// Decompose `container` into headings, paragraphs, lists, code and full text.
///
/// Pure with respect to the tree: nothing is mutated, and sparse markup
/// yields empty fields rather than errors.
pub fn extract_structured<N: PageNode>(
    container: &N,
    title: &str,
    url: &str,
    options: &Options,
    lexicon: &Lexicon,
) -> StructuredContent {
    let headings: Vec<String> = container
        .select_all(HEADING_SELECTOR)
        .iter()
        .map(|h| clean_text(&h.text_content()))
        .filter(|t| !t.is_empty())
        .collect();

    let paragraphs: Vec<String> = container
        .select_all(PARAGRAPH_SELECTOR)
        .iter()
        .map(|p| clean_text(&p.text_content()))
        .filter(|t| char_len(t) > options.min_paragraph_chars && !lexicon.is_boilerplate(t))
        .collect();

    let lists: Vec<Vec<String>> = container
        .select_all(LIST_SELECTOR)
        .iter()
        .map(|list| {
            list.select_all(LIST_ITEM_SELECTOR)
                .iter()
                .map(|li| clean_text(&li.text_content()))
                .filter(|t| !t.is_empty())
                .take(options.max_list_items)
                .collect::<Vec<_>>()
        })
        .filter(|items| !items.is_empty())
        .take(options.max_lists)
        .collect();

    let code_blocks: Vec<String> = container
        .select_all(CODE_SELECTOR)
        .iter()
        .map(|node| clean_text(&node.text_content()))
        .filter(|t| !t.is_empty())
        .take(options.max_code_blocks)
        .map(|code| truncate_code(code, options.max_code_block_chars))
        .collect();

    let full_text = element_text(container);

    debug!(
        headings = headings.len(),
        paragraphs = paragraphs.len(),
        lists = lists.len(),
        code_blocks = code_blocks.len(),
        "extracted structured content"
    );

    StructuredContent {
        title: clean_text(title),
        url: url.to_string(),
        headings,
        paragraphs,
        lists,
        code_blocks,
        full_text,
    }
}

fn truncate_code(code: String, max_chars: usize) -> String {
    if char_len(&code) > max_chars {
        format!("{}…", take_chars(&code, max_chars))
    } else {
        code
    }
}
