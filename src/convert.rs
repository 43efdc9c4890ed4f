use log::*;
use scraper::Html;

use crate::error::Result;
use crate::extract;
use crate::header::HugoHeader;
use crate::markdown::MarkdownRenderer;
use crate::timestamp;

/// Converts one archived post fragment into a Hugo document:
/// `---`, YAML header, `---`, Markdown body.
pub fn convert_post(post: &str, renderer: &MarkdownRenderer) -> Result<String> {
    let doc = Html::parse_fragment(post);

    let title = extract::extract_title(&doc)?;
    let timestamp = timestamp::parse_posted_at(&extract::discussion_text(&doc)?)?;
    let category = extract::extract_category(&doc);
    if category.is_none() {
        debug!("{:32} => no category", title);
    }
    let content = extract::select_content(extract::content_region(&doc)?);
    debug!("{:32} => {} content nodes", title, content.len());

    let header = HugoHeader::new(timestamp, &title, category.as_deref()).to_yaml()?;
    let body = renderer.render(&content);

    Ok(["---", header.trim_end_matches('\n'), "---", body.as_str()].join("\n"))
}
