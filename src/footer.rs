//! Footer detection for plain-text message bodies
//!
//! Two heuristics are tried in order and the first match wins:
//!
//! 1. An RFC 3676 signature separator (a `-- ` line). Only the last
//!    separator splits off the footer.
//! 2. A quoted-reply header of the form
//!    `On Mon, Jan 5, 2020 at 3:45 PM, someone wrote:`. Everything from that
//!    header to the end of the body is the footer.
//!
//! When a footer is found the remaining body has its line breaks marked up
//! with `<br />` for display. A body without a footer is returned untouched.

use crate::config::FooterOptions;
use crate::types::{DetectionMethod, ExtractionResult};
use chrono::NaiveDateTime;
use regex::{Captures, Regex};
use tracing::{debug, trace};

/// Separator used to rejoin body segments that preceded the last delimiter
const SEPARATOR_LINE: &str = "\n-- \n";

// ASCII whitespace only
static DELIMITER_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"(?-u:\s)*[\r\n]--(?-u:\s)+").unwrap());

static REPLY_LINE_REGEX: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(
        r"On [A-Za-z]{3}, ([A-Za-z]{3} [0-9]{1,2}, 20[0-9]{2}) at ([0-9]{1,2}:[0-9]{2} (?:AM|PM)).+",
    )
    .unwrap()
});

static LINE_BREAK_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"\r\n|\n\r|\n|\r").unwrap());

/// Splits footers off message bodies
#[derive(Debug, Clone, Default)]
pub struct FooterExtractor {
    options: FooterOptions,
}

impl FooterExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_options(options: FooterOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> &FooterOptions {
        &self.options
    }

    /// Detect and strip the footer of `body`
    #[must_use]
    pub fn extract(&self, body: &str) -> ExtractionResult {
        if let Some(result) = self.split_on_delimiter(body) {
            return result;
        }

        if let Some(result) = self.split_on_reply_line(body) {
            return result;
        }

        trace!("No footer found in {} byte body", body.len());
        ExtractionResult::unchanged(body)
    }

    fn split_on_delimiter(&self, body: &str) -> Option<ExtractionResult> {
        let segments: Vec<&str> = DELIMITER_REGEX.split(body).collect();

        if let Some((footer, rest)) = segments.split_last()
            && !rest.is_empty()
        {
            debug!(
                "Footer found after signature delimiter ({} delimiters)",
                rest.len()
            );
            let marker = self.options.line_break_marker();
            return Some(ExtractionResult {
                body: insert_line_break_markers(&rest.join(SEPARATOR_LINE), marker),
                footer: Some((*footer).to_string()),
                method: Some(DetectionMethod::Delimiter),
            });
        }

        None
    }

    fn split_on_reply_line(&self, body: &str) -> Option<ExtractionResult> {
        let caps = REPLY_LINE_REGEX.captures(body)?;
        let start = caps.get(0)?.start();
        let sent_at = parse_reply_timestamp(&caps);

        debug!("Footer found at reply header, byte offset {start}");

        let marker = self.options.line_break_marker();
        Some(ExtractionResult {
            body: insert_line_break_markers(&body[..start], marker),
            footer: Some(body[start..].to_string()),
            method: Some(DetectionMethod::ReplyLine { sent_at }),
        })
    }
}

/// Detect and strip the footer of `body` using default options
#[must_use]
pub fn extract_footer(body: &str) -> ExtractionResult {
    FooterExtractor::new().extract(body)
}

/// Insert `marker` in front of every line break in `text`
///
/// `\r\n` and `\n\r` count as a single break. The breaks themselves are kept.
#[must_use]
pub fn insert_line_break_markers(text: &str, marker: &str) -> String {
    LINE_BREAK_REGEX
        .replace_all(text, |caps: &Captures| format!("{marker}{}", &caps[0]))
        .into_owned()
}

// Weekday is ignored
fn parse_reply_timestamp(caps: &Captures) -> Option<NaiveDateTime> {
    let date = caps.get(1)?.as_str();
    let time = caps.get(2)?.as_str();
    NaiveDateTime::parse_from_str(&format!("{date} {time}"), "%b %d, %Y %I:%M %p").ok()
}
