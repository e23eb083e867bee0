//! Page-level parsing

use crate::config::ParserConfig;
use crate::header::{Header, parse_header};
use serde::{Deserialize, Serialize};

/// A page with no email header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Full page text
    pub body: String,
}

/// An email reassembled from one or more consecutive pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    /// Body text following the header, plus any continuation pages
    pub body: String,

    /// Validated header
    pub header: Header,

    /// Identifier of the originating document (usually its file name)
    pub document_id: String,

    /// 1-based page on which the header was found
    pub page_number: usize,

    /// Number of physical pages merged into this email
    pub page_count: usize,
}

impl Email {
    /// Create an email from a header page; document metadata is filled in later
    #[must_use]
    pub const fn new(header: Header, body: String) -> Self {
        Self {
            body,
            header,
            document_id: String::new(),
            page_number: 0,
            page_count: 0,
        }
    }

    /// One-line summary of the email's key metadata
    #[must_use]
    pub fn info(&self) -> String {
        format!(
            "{}, {}; {}; {}; {}; {:?}",
            self.page_number,
            self.page_count,
            self.header.subject.as_deref().unwrap_or_default(),
            self.header.date.as_deref().unwrap_or_default(),
            self.header.from_email,
            self.header.to,
        )
    }
}

/// Result of parsing a single page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ParsedPage {
    /// The page starts a new email
    Email(Email),
    /// The page has no header
    Page(Page),
}

impl ParsedPage {
    #[must_use]
    pub const fn is_email(&self) -> bool {
        matches!(self, Self::Email(_))
    }

    #[must_use]
    pub fn body(&self) -> &str {
        match self {
            Self::Email(email) => &email.body,
            Self::Page(page) => &page.body,
        }
    }
}

/// Parse one page of text into an email start or a plain page.
///
/// Blank lines between the header and the body are dropped. A page without
/// a valid header keeps its text unmodified.
#[must_use]
pub fn parse_page(text: &str, config: &ParserConfig) -> ParsedPage {
    let lines: Vec<&str> = text.lines().collect();

    let Some(header) = parse_header(&lines, config) else {
        return ParsedPage::Page(Page {
            body: text.to_string(),
        });
    };

    // Whitespace-only lines count as separators too, not only empty ones
    let body_begin = lines
        .iter()
        .skip(header.end_ln)
        .position(|line| !line.trim().is_empty())
        .map_or(lines.len(), |offset| header.end_ln + offset);
    let body = lines[body_begin..].join("\n");

    ParsedPage::Email(Email::new(header, body))
}
