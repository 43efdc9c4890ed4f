use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::Result;

/// Hugo front matter of a migrated post.
///
/// Fields are declared in key order so the YAML output is sorted.
#[derive(PartialEq, Eq, Debug, Serialize)]
pub struct HugoHeader {
    date: String,
    draft: bool,
    math: bool,
    tags: Vec<String>,
    title: String,
    toc: bool,
}

impl HugoHeader {
    pub fn new(timestamp: NaiveDateTime, title: &str, category: Option<&str>) -> HugoHeader {
        HugoHeader {
            date: timestamp.format("%Y-%m-%dT%H:%M:%S").to_string(),
            draft: true,
            math: false,
            tags: vec![category.unwrap_or_default().to_string()],
            title: title.to_string(),
            toc: false,
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
