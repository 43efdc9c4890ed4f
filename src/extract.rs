use lazy_static::*;
use scraper::{ElementRef, Html, Node, Selector};

use crate::error::{Error, Result};

lazy_static! {
    static ref TITLE: Selector = Selector::parse("h2 a").unwrap();
    static ref CATEGORY: Selector = Selector::parse("span.tag a").unwrap();
    static ref POST: Selector = Selector::parse(".post").unwrap();
    static ref DISCUSSION: Selector = Selector::parse(".post .discussion p").unwrap();
}

/// Direct children of `.post` whose tag names carry post content.
const CONTENT_TAGS: &[&str] = &["p", "blockquote", "img", "table", "ul", "ol", "pre", "hr"];

/// What a child of the content region is, as far as selection cares.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum NodeKind<'a> {
    Element(&'a str),
    Text,
    Comment,
    Other,
}

impl<'a> NodeKind<'a> {
    pub fn of(node: &'a Node) -> NodeKind<'a> {
        match node {
            Node::Element(element) => NodeKind::Element(element.name()),
            Node::Text(_) => NodeKind::Text,
            Node::Comment(_) => NodeKind::Comment,
            _ => NodeKind::Other,
        }
    }

    pub fn is_content(&self) -> bool {
        matches!(self, NodeKind::Element(name) if CONTENT_TAGS.contains(name))
    }
}

pub fn extract_title(doc: &Html) -> Result<String> {
    doc.select(&TITLE)
        .next()
        .map(|a| a.text().collect())
        .ok_or(Error::MissingTitle)
}

/// `None` when the post carries no `span.tag a`.
pub fn extract_category(doc: &Html) -> Option<String> {
    doc.select(&CATEGORY)
        .next()
        .map(|a| a.text().collect::<String>().to_lowercase())
}

pub fn discussion_text(doc: &Html) -> Result<String> {
    doc.select(&DISCUSSION)
        .next()
        .map(|p| p.text().collect())
        .ok_or_else(|| Error::ConversionFailure("no `.post .discussion p` element".to_string()))
}

pub fn content_region(doc: &Html) -> Result<ElementRef<'_>> {
    doc.select(&POST)
        .next()
        .ok_or_else(|| Error::ConversionFailure("no `.post` element".to_string()))
}

/// Selects the content-bearing direct children of `post`, in document order.
///
/// The first comment node terminates the content: nothing after it is
/// selected, whatever its tag.
pub fn select_content<'a>(post: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    let mut terminated = false;
    post.children()
        .filter(|child| {
            let kind = NodeKind::of(child.value());
            terminated |= kind == NodeKind::Comment;
            !terminated && kind.is_content()
        })
        .filter_map(ElementRef::wrap)
        .collect()
}
