//! Email header detection, scanning and validation for a single page

use crate::config::ParserConfig;
use crate::token::FieldToken;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, trace};

/// A validated email header found at the top of a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Sender as printed
    pub from_email: String,

    /// Primary recipients as printed
    pub to: Vec<String>,

    /// CC recipients as printed
    pub cc: Vec<String>,

    /// BCC recipients as printed
    pub bcc: Vec<String>,

    /// Email subject
    pub subject: Option<String>,

    /// Date sent, falling back to the `Sent:` field
    pub date: Option<String>,

    /// Attachment names as printed
    pub attachments: Vec<String>,

    /// Importance marker (e.g. "High")
    pub importance: Option<String>,

    /// 1-based line number where the header starts
    pub begin_ln: usize,

    /// 1-based line number of the last header line
    pub end_ln: usize,

    /// Colon-bearing header lines with an unrecognized label
    pub unprocessed: Vec<String>,
}

static EMAIL_REGEX: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap()
});

// Printed date layouts seen in mail client exports, tried in order
const DATETIME_FORMATS: &[&str] = &[
    "%A, %B %d, %Y %I:%M:%S %p",
    "%A, %B %d, %Y %I:%M %p",
    "%A, %B %d, %Y %H:%M",
    "%a %m/%d/%Y %I:%M %p",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%A, %B %d, %Y", "%B %d, %Y", "%m/%d/%Y"];

impl Header {
    /// Bare sender address, if one appears in the `From` value
    #[must_use]
    pub fn sender_address(&self) -> Option<&str> {
        EMAIL_REGEX.find(&self.from_email).map(|m| m.as_str())
    }

    /// Bare addresses found in `to`, `cc` and `bcc`, in that order
    #[must_use]
    pub fn recipient_addresses(&self) -> Vec<String> {
        self.to
            .iter()
            .chain(&self.cc)
            .chain(&self.bcc)
            .flat_map(|value| EMAIL_REGEX.find_iter(value))
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Interpret the printed date, if it uses a common layout
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDateTime> {
        let date = self.date.as_deref()?.trim();

        if let Ok(dt) = DateTime::parse_from_rfc2822(date) {
            return Some(dt.naive_local());
        }
        DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(date, fmt).ok())
            .or_else(|| {
                DATE_FORMATS
                    .iter()
                    .find_map(|fmt| NaiveDate::parse_from_str(date, fmt).ok())
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })
    }
}

/// Header fields accumulated while scanning one page.
///
/// Reading a field that was never assigned yields an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawHeaderFields {
    values: HashMap<FieldToken, String>,

    /// 1-based line number of the header start line
    pub begin_ln: usize,

    /// 1-based line number of the last header line
    pub end_ln: usize,

    /// Raw lines with an unrecognized label
    pub unprocessed: Vec<String>,
}

impl RawHeaderFields {
    #[must_use]
    pub fn get(&self, token: FieldToken) -> &str {
        self.values.get(&token).map_or("", String::as_str)
    }

    pub fn set(&mut self, token: FieldToken, value: impl Into<String>) {
        self.values.insert(token, value.into());
    }

    /// Append text to a field value with no separator
    pub fn append(&mut self, token: FieldToken, text: &str) {
        self.values.entry(token).or_default().push_str(text);
    }

    fn optional(&self, token: FieldToken) -> Option<String> {
        let value = self.get(token);
        (!value.is_empty()).then(|| value.to_string())
    }

    fn list(&self, token: FieldToken) -> Vec<String> {
        self.optional(token).into_iter().collect()
    }
}

/// Find the 0-based index of the line that starts a header.
///
/// Only the first `max_start_line` lines are examined, and on each only the
/// first `max_colon_column` characters are searched for the label colon.
#[must_use]
pub fn find_header_start(lines: &[&str], config: &ParserConfig) -> Option<usize> {
    lines
        .iter()
        .take(config.max_start_line)
        .position(|line| {
            line.char_indices()
                .take(config.max_colon_column)
                .find(|&(_, c)| c == ':')
                .and_then(|(idx, _)| FieldToken::from_label(&line[..idx]))
                .is_some()
        })
}

/// Consume header lines from `start` until a blank line or the end of the page
#[must_use]
pub fn scan_header(lines: &[&str], start: usize) -> RawHeaderFields {
    let mut fields = RawHeaderFields {
        begin_ln: start + 1,
        ..RawHeaderFields::default()
    };
    let mut last_field: Option<FieldToken> = None;
    let mut ln = start;

    while ln < lines.len() {
        scan_line(&mut fields, &mut last_field, lines[ln]);
        ln += 1;
        if ln >= lines.len() || lines[ln].trim().is_empty() {
            break;
        }
    }

    // ln is the 0-based stopping line, i.e. the 1-based last header line
    fields.end_ln = ln;
    fields
}

fn scan_line(fields: &mut RawHeaderFields, last_field: &mut Option<FieldToken>, raw: &str) {
    let line = raw.trim();

    if let Some((label, value)) = line.split_once(':') {
        *last_field = FieldToken::from_label(label);
        match *last_field {
            Some(token) => fields.set(token, value.trim()),
            None => {
                trace!(line, "unprocessed header line");
                fields.unprocessed.push(line.to_string());
            }
        }
    } else if let Some(token) = *last_field {
        // Wrapped value: keep the continuation's own leading spacing
        fields.append(token, raw.trim_end());
    }
}

/// Turn accumulated fields into a header, or reject a false positive.
///
/// A genuine header needs a sender and a date (or a `Sent:` value).
#[must_use]
pub fn validate_header(fields: RawHeaderFields) -> Option<Header> {
    let date = fields
        .optional(FieldToken::Date)
        .or_else(|| fields.optional(FieldToken::Sent));
    let from_email = fields.optional(FieldToken::From);

    let (Some(date), Some(from_email)) = (date, from_email) else {
        debug!(
            begin_ln = fields.begin_ln,
            end_ln = fields.end_ln,
            "rejected header candidate without from/date"
        );
        return None;
    };

    Some(Header {
        from_email,
        to: fields.list(FieldToken::To),
        cc: fields.list(FieldToken::Cc),
        bcc: fields.list(FieldToken::Bcc),
        subject: fields.optional(FieldToken::Subject),
        date: Some(date),
        attachments: fields.list(FieldToken::Attachments),
        importance: fields.optional(FieldToken::Importance),
        begin_ln: fields.begin_ln,
        end_ln: fields.end_ln,
        unprocessed: fields.unprocessed,
    })
}

/// Detect, scan and validate the header of a page's lines
#[must_use]
pub fn parse_header(lines: &[&str], config: &ParserConfig) -> Option<Header> {
    let start = find_header_start(lines, config)?;
    validate_header(scan_header(lines, start))
}
