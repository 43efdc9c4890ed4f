use chrono::NaiveDateTime;
use lazy_static::*;
use regex::Regex;

use crate::error::{Error, Result};

lazy_static! {
    // e.g. "This entry was posted at 12:05 pm on 3 May 2022 and is filed under ..."
    static ref POSTED_AT: Regex = Regex::new(
        r"^This\s+entry\s+was\s+posted\s+at\s+(?P<time>\d{1,2}:\d{2})\s+(?P<meridiem>am|pm)\s+on\s+(?P<date>\d{1,2}\s+\w{3,}\s+\d{4})"
    )
    .unwrap();
}

/// Parses the leading "This entry was posted at ..." sentence of the
/// discussion paragraph. Anything after the date is ignored.
pub fn parse_posted_at(text: &str) -> Result<NaiveDateTime> {
    let caps = POSTED_AT
        .captures(text)
        .ok_or_else(|| Error::MalformedTimestamp(leading_sentence(text)))?;

    let date = caps["date"]
        .split_whitespace()
        .map(month_alias)
        .collect::<Vec<_>>()
        .join(" ");
    let normalized = format!("{} {} {}", date, &caps["time"], &caps["meridiem"]);

    NaiveDateTime::parse_from_str(&normalized, "%d %B %Y %I:%M %p")
        .map_err(|_| Error::MalformedTimestamp(caps[0].to_string()))
}

/// chrono takes full month names and three-letter abbreviations only.
fn month_alias(token: &str) -> &str {
    if token.eq_ignore_ascii_case("sept") {
        "Sep"
    } else {
        token
    }
}

fn leading_sentence(text: &str) -> String {
    text.trim().chars().take(80).collect()
}
