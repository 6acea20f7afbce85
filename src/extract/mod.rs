//! Pattern-based extraction of display fields from loosely formatted feed text.
//!
//! None of these functions fail. Feed text is untrusted, so every extractor
//! degrades to a sentinel (or `None`) instead of returning an error.

use std::sync::LazyLock;

use chrono::DateTime;
use regex::Regex;

pub const UNKNOWN_AUTHOR: &str = "Unknown Author";
pub const NO_DESCRIPTION: &str = "No Description";
pub const UNKNOWN_DATE: &str = "Unknown Date";

/// Display format for published dates, e.g. `Jan 5, 2025 at 11:04 pm`.
const DATE_FORMAT: &str = "%b %-d, %Y at %-I:%M %P";

static WIDTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"width\s*=\s*['"](\d+)['"]"#).expect("valid width pattern"));

static HEIGHT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"height\s*=\s*['"](\d+)['"]"#).expect("valid height pattern"));

static AUTHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\("(.*?)"\)"#).expect("valid author pattern"));

// `.` does not cross newlines, so each block must open and close on one line.
static PARAGRAPH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<p>(.*?)</p>").expect("valid paragraph pattern"));

/// Returns the first capture group of the first match of `pattern` in `text`.
///
/// An invalid pattern is treated the same as no match.
pub fn match_first_group(text: &str, pattern: &str) -> Option<String> {
    let re = Regex::new(pattern).ok()?;
    first_group(&re, text).map(String::from)
}

fn first_group<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Image width and height as found in the description markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dimensions {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl Dimensions {
    /// Both sides, or `None` if either is missing.
    pub fn both(&self) -> Option<(u32, u32)> {
        self.width.zip(self.height)
    }

    pub fn label(&self) -> String {
        match self.both() {
            Some((width, height)) => format!("{} x {}", width, height),
            None => "Unknown".to_string(),
        }
    }
}

/// Finds `width="N"` and `height="N"` independently.
///
/// A numeral that does not fit in a `u32` leaves only that side empty.
pub fn parse_dimensions(description_html: &str) -> Dimensions {
    let axis = |re: &Regex| first_group(re, description_html).and_then(|n| n.parse::<u32>().ok());

    Dimensions {
        width: axis(&WIDTH_RE),
        height: axis(&HEIGHT_RE),
    }
}

/// Pulls the display name out of an author string like
/// `nobody@flickr.com ("jane doe")` and capitalizes each word.
pub fn parse_author(author_raw: &str) -> String {
    first_group(&AUTHOR_RE, author_raw)
        .map(capitalize_words)
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string())
}

/// Returns the trimmed text of the third `<p>` block.
///
/// The public photo feed renders every description from the same template:
/// attribution, then the thumbnail link, then the caption. Anything with
/// fewer than three blocks has no caption.
pub fn parse_description(description_html: &str) -> String {
    PARAGRAPH_RE
        .captures_iter(description_html)
        .nth(2)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| NO_DESCRIPTION.to_string())
}

/// Renders an ISO-8601 timestamp in UTC as `Jan 5, 2025 at 11:04 pm`.
pub fn format_published_date(published_raw: &str) -> String {
    match DateTime::parse_from_rfc3339(published_raw.trim()) {
        Ok(date) => date.naive_utc().format(DATE_FORMAT).to_string(),
        Err(_) => UNKNOWN_DATE.to_string(),
    }
}

/// Upper-cases the first letter of every whitespace separated word and
/// lower-cases the rest.
fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            at_word_start = false;
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }

    out
}
