//! Document Capability Interface
//!
//! The extraction core never touches a concrete tree API. It reads pages
//! through two narrow traits: [`PageDocument`] for the page itself and
//! [`PageNode`] for individual nodes (visibility, text, selector-scoped
//! queries). Any tree can drive the pipeline: a static HTML parse, a bridge to
//! a live browser, or a synthetic tree built for tests.
//!
//! [`HtmlPage`] / [`HtmlNode`] implement the traits on top of `dom_query`.

use std::collections::HashSet;
use std::hash::Hash;

// Re-export core types for external use
pub use dom_query::{Document, NodeId, NodeRef, Selection};
use url::Url;

use crate::encoding;
use crate::error::{Error, Result};

/// Style properties relevant to visibility.
///
/// Values are lowercased and trimmed; `None` means the property is not set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComputedStyle {
    /// `display` value, e.g. `"none"` or `"block"`.
    pub display: Option<String>,
    /// `visibility` value, e.g. `"hidden"`.
    pub visibility: Option<String>,
    /// `opacity` value exactly as declared, e.g. `"0"` or `"0.5"`.
    pub opacity: Option<String>,
}

impl ComputedStyle {
    /// Read the visibility-related declarations from an inline `style` attribute.
    #[must_use]
    pub fn from_inline(style: &str) -> Self {
        let mut computed = Self::default();
        for declaration in style.split(';') {
            let Some((name, value)) = declaration.split_once(':') else {
                continue;
            };
            let value = value
                .trim()
                .trim_end_matches("!important")
                .trim()
                .to_ascii_lowercase();
            match name.trim().to_ascii_lowercase().as_str() {
                "display" => computed.display = Some(value),
                "visibility" => computed.visibility = Some(value),
                "opacity" => computed.opacity = Some(value),
                _ => {}
            }
        }
        computed
    }
}

/// Rendered size of an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub width: f64,
    pub height: f64,
}

/// Read-only view of one node in a rendered document tree.
///
/// Nodes are borrowed for a single extraction pass; implementations must not
/// require mutation of the underlying tree.
pub trait PageNode: Sized + Clone {
    /// Identity key used to de-duplicate nodes reached through several selectors.
    type Id: Copy + Eq + Hash;

    /// Stable identity of this node within its document.
    fn node_id(&self) -> Self::Id;

    /// Whether this node is an element (as opposed to text, comment, document).
    fn is_element(&self) -> bool;

    /// Lowercase tag name for elements.
    fn tag_name(&self) -> Option<String>;

    /// Attribute value, if present.
    fn attr(&self, name: &str) -> Option<String>;

    /// Concatenated text of all descendant text nodes (DOM `textContent`).
    fn text_content(&self) -> String;

    /// Text as a user would see it: hidden and script content skipped, block
    /// boundaries turned into line breaks. Defaults to `text_content`.
    fn inner_text(&self) -> String {
        self.text_content()
    }

    /// Serialized markup of the node including itself.
    fn outer_html(&self) -> String;

    /// Descendants matching a CSS selector list, in document order.
    ///
    /// Invalid selectors yield no matches.
    fn select_all(&self, selector: &str) -> Vec<Self>;

    /// First descendant matching a CSS selector list.
    fn select_first(&self, selector: &str) -> Option<Self> {
        self.select_all(selector).into_iter().next()
    }

    /// Text of this subtree without the descendants that match `selector`.
    ///
    /// The node itself is never excluded, and the tree is left untouched.
    fn text_excluding(&self, selector: &str) -> String;

    /// Visibility-related style. Defaults to the inline `style` attribute, with
    /// the `hidden` attribute mapping to `display: none`.
    fn computed_style(&self) -> ComputedStyle {
        let mut style = ComputedStyle::from_inline(&self.attr("style").unwrap_or_default());
        if style.display.is_none() && self.attr("hidden").is_some() {
            style.display = Some("none".to_string());
        }
        style
    }

    /// Rendered size, when the host knows it. `None` means unknown.
    fn bounding_box(&self) -> Option<BoundingBox> {
        None
    }
}

/// A page: its title, location and the two roots extraction starts from.
pub trait PageDocument {
    type Node<'a>: PageNode
    where
        Self: 'a;

    /// Raw `<title>` text (not yet cleaned).
    fn title(&self) -> String;

    /// Full page URL (`location.href`).
    fn url(&self) -> &str;

    /// Path component of [`url`](Self::url); empty when the URL does not parse.
    fn location_path(&self) -> String {
        Url::parse(self.url())
            .map(|url| url.path().to_string())
            .unwrap_or_default()
    }

    /// The document element (`<html>`).
    fn root(&self) -> Self::Node<'_>;

    /// The `<body>` element. Implementations must always return a node;
    /// documents without a body hand back their root instead.
    fn body(&self) -> Self::Node<'_>;
}

// === dom_query implementation ===

/// Tags whose content never renders as text.
const UNRENDERED_TAGS: &[&str] = &["script", "style", "noscript", "template", "head"];

/// Tags that start a new line in rendered text.
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "details", "div", "dl", "dt",
    "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5",
    "h6", "header", "hr", "li", "main", "nav", "ol", "p", "pre", "section", "summary",
    "table", "tbody", "thead", "tfoot", "tr", "ul",
];

/// A parsed static HTML page with a known location.
pub struct HtmlPage {
    document: Document,
    location: Url,
}

impl HtmlPage {
    /// Parse `html` served from `url`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] when `url` is not an absolute URL.
    pub fn new(html: &str, url: &str) -> Result<Self> {
        let location = Url::parse(url.trim()).map_err(|e| Error::InvalidUrl(format!("{url}: {e}")))?;
        Ok(Self {
            document: Document::from(html),
            location,
        })
    }

    /// Parse raw HTML bytes, detecting the charset from meta tags first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] when `url` is not an absolute URL.
    pub fn from_bytes(html: &[u8], url: &str) -> Result<Self> {
        Self::new(&encoding::transcode_to_utf8(html), url)
    }

    /// Parsed page location.
    #[must_use]
    pub fn location(&self) -> &Url {
        &self.location
    }

    /// Path component of the location, e.g. `/owner/repo/pull/7`.
    #[must_use]
    pub fn path(&self) -> &str {
        self.location.path()
    }

    /// Underlying `dom_query` document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    fn first_element(&self, tag: &str) -> Option<NodeRef<'_>> {
        Selection::from(self.document.root())
            .try_select(tag)
            .and_then(|sel| sel.nodes().first().copied())
    }
}

impl PageDocument for HtmlPage {
    type Node<'a> = HtmlNode<'a>;

    fn title(&self) -> String {
        self.first_element("title")
            .map(|node| node.text().to_string())
            .unwrap_or_default()
    }

    fn url(&self) -> &str {
        self.location.as_str()
    }

    fn root(&self) -> HtmlNode<'_> {
        HtmlNode(self.first_element("html").unwrap_or_else(|| self.document.root()))
    }

    fn body(&self) -> HtmlNode<'_> {
        self.first_element("body").map_or_else(|| self.root(), HtmlNode)
    }
}

/// A node of an [`HtmlPage`].
#[derive(Clone, Copy)]
pub struct HtmlNode<'a>(pub NodeRef<'a>);

impl<'a> HtmlNode<'a> {
    fn selection(&self) -> Selection<'a> {
        Selection::from(self.0)
    }
}

impl PageNode for HtmlNode<'_> {
    type Id = NodeId;

    fn node_id(&self) -> NodeId {
        self.0.id
    }

    fn is_element(&self) -> bool {
        self.0.is_element()
    }

    fn tag_name(&self) -> Option<String> {
        if !self.0.is_element() {
            return None;
        }
        self.0.node_name().map(|name| name.to_ascii_lowercase())
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.selection().attr(name).map(|value| value.to_string())
    }

    fn text_content(&self) -> String {
        self.0.text().to_string()
    }

    fn inner_text(&self) -> String {
        let mut raw = String::new();
        rendered_text(&self.0, &mut raw);
        collapse_lines(&raw)
    }

    fn outer_html(&self) -> String {
        self.selection().html().to_string()
    }

    fn select_all(&self, selector: &str) -> Vec<Self> {
        self.selection()
            .try_select(selector)
            .map(|sel| sel.nodes().iter().copied().map(HtmlNode).collect())
            .unwrap_or_default()
    }

    fn text_excluding(&self, selector: &str) -> String {
        if self.0.is_text() {
            return self.text_content();
        }
        let excluded: HashSet<NodeId> = self.select_all(selector).iter().map(PageNode::node_id).collect();
        let mut out = String::new();
        text_skipping(&self.0, &excluded, &mut out);
        out
    }

    /// Unknown for static markup, except that a `display: none` ancestor
    /// collapses the box to zero.
    fn bounding_box(&self) -> Option<BoundingBox> {
        let mut current = self.0.parent();
        while let Some(node) = current {
            if node.is_element() && HtmlNode(node).computed_style().display.as_deref() == Some("none") {
                return Some(BoundingBox { width: 0.0, height: 0.0 });
            }
            current = node.parent();
        }
        None
    }
}

/// Append the text under `node`, skipping the subtrees in `excluded`.
fn text_skipping(node: &NodeRef, excluded: &HashSet<NodeId>, out: &mut String) {
    for child in node.children() {
        if excluded.contains(&child.id) {
            continue;
        }
        if child.is_text() {
            out.push_str(&child.text());
        } else {
            text_skipping(&child, excluded, out);
        }
    }
}

/// Append the rendered text of `node` to `out`, marking block edges with `\n`.
fn rendered_text(node: &NodeRef, out: &mut String) {
    if node.is_text() {
        out.push_str(&node.text());
        return;
    }
    if !node.is_element() {
        for child in node.children() {
            rendered_text(&child, out);
        }
        return;
    }

    let element = HtmlNode(*node);
    let tag = element.tag_name().unwrap_or_default();
    if UNRENDERED_TAGS.contains(&tag.as_str()) {
        return;
    }
    if element.computed_style().display.as_deref() == Some("none") {
        return;
    }
    match tag.as_str() {
        "br" => {
            out.push('\n');
            return;
        }
        "td" | "th" => out.push('\t'),
        _ => {}
    }

    let block = BLOCK_TAGS.contains(&tag.as_str());
    if block {
        out.push('\n');
    }
    for child in node.children() {
        rendered_text(&child, out);
    }
    if block {
        out.push('\n');
    }
}

/// Collapse horizontal whitespace per line and squeeze blank-line runs.
fn collapse_lines(raw: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    for line in raw.lines() {
        let line = line.split_whitespace().collect::<Vec<_>>().join(" ");
        if line.is_empty() && lines.last().is_none_or(String::is_empty) {
            continue;
        }
        lines.push(line);
    }
    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines.join("\n")
}
