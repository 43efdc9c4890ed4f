//! Markdown rendition of selected content nodes.
//!
//! The HTML to Markdown grammar is `html2md`'s. Only emphasis is overridden,
//! so that bold and italic use the configured symbol.

use std::collections::HashMap;

use html2md::{Handle, StructuredPrinter, TagHandler, TagHandlerFactory};
use scraper::ElementRef;
use serde::Deserialize;

#[derive(PartialEq, Eq, Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmphasisSymbol {
    #[default]
    Underscore,
    Asterisk,
}

impl EmphasisSymbol {
    fn italic(self) -> &'static str {
        match self {
            EmphasisSymbol::Underscore => "_",
            EmphasisSymbol::Asterisk => "*",
        }
    }

    fn bold(self) -> &'static str {
        match self {
            EmphasisSymbol::Underscore => "__",
            EmphasisSymbol::Asterisk => "**",
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer {
    emphasis: EmphasisSymbol,
}

impl MarkdownRenderer {
    pub fn new(emphasis: EmphasisSymbol) -> MarkdownRenderer {
        MarkdownRenderer { emphasis }
    }

    /// Joins the outer HTML of `nodes` with newlines and converts the result.
    pub fn render(&self, nodes: &[ElementRef<'_>]) -> String {
        let html = nodes
            .iter()
            .map(|node| node.html())
            .collect::<Vec<_>>()
            .join("\n");
        self.render_html(&html)
    }

    pub fn render_html(&self, html: &str) -> String {
        let mut tag_map: HashMap<String, Box<dyn TagHandlerFactory>> = HashMap::new();
        let italic = EmphasisFactory(self.emphasis.italic());
        let bold = EmphasisFactory(self.emphasis.bold());
        for tag in ["em", "i"] {
            tag_map.insert(tag.into(), Box::new(italic.clone()));
        }
        for tag in ["strong", "b"] {
            tag_map.insert(tag.into(), Box::new(bold.clone()));
        }
        html2md::parse_html_custom(html, &tag_map)
    }
}

/// Wraps the element's text in `marker` on both sides.
struct Emphasis(&'static str);

impl TagHandler for Emphasis {
    fn handle(&mut self, _tag: &Handle, printer: &mut StructuredPrinter) {
        printer.append_str(self.0);
    }

    fn after_handle(&mut self, printer: &mut StructuredPrinter) {
        printer.append_str(self.0);
    }
}

#[derive(Clone, Debug)]
struct EmphasisFactory(&'static str);

impl TagHandlerFactory for EmphasisFactory {
    fn instantiate(&self) -> Box<dyn TagHandler> {
        Box::new(Emphasis(self.0))
    }
}
