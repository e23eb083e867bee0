//! Whole-document extraction

use crate::aggregate::EmailAggregator;
use crate::config::ParserConfig;
use crate::error::{ExtractError, Result};
use crate::extract::{TextExtractor, document_id};
use crate::page::{Email, parse_page};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// The emails found in one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Document identifier (usually the file name)
    pub document_id: String,

    /// Number of physical pages
    pub page_count: usize,

    /// Emails in the order their headers appear
    pub emails: Vec<Email>,

    /// Extraction failure, if the document could not be read
    pub error: Option<String>,
}

impl Document {
    /// Parse the page texts of a document, in order
    #[must_use]
    pub fn from_pages<S: AsRef<str>>(
        document_id: impl Into<String>,
        pages: &[S],
        config: &ParserConfig,
    ) -> Self {
        let document_id = document_id.into();
        let mut aggregator = EmailAggregator::new(document_id.clone());
        aggregator.extend(pages.iter().map(|page| parse_page(page.as_ref(), config)));
        let emails = aggregator.finish();

        info!(
            document = %document_id,
            pages = pages.len(),
            emails = emails.len(),
            "parsed document"
        );

        Self {
            document_id,
            page_count: pages.len(),
            emails,
            error: None,
        }
    }

    /// Extract a document's pages and parse them.
    ///
    /// Extraction failures are returned as-is; no partial result is produced.
    pub fn extract(
        path: &Path,
        extractor: &impl TextExtractor,
        config: &ParserConfig,
    ) -> Result<Self> {
        let pages = extractor.extract_pages(path)?;
        Ok(Self::from_pages(document_id(path), &pages, config))
    }

    /// An empty document recording why extraction failed
    #[must_use]
    pub fn failed(document_id: impl Into<String>, error: &ExtractError) -> Self {
        let document_id = document_id.into();
        warn!(document = %document_id, %error, "document extraction failed");
        Self {
            document_id,
            page_count: 0,
            emails: Vec::new(),
            error: Some(error.to_string()),
        }
    }

    /// High-level summary: page and email counts, plus any error
    #[must_use]
    pub fn info(&self) -> String {
        let error = self
            .error
            .as_ref()
            .map_or_else(String::new, |e| format!(", {e}"));
        format!(
            "{} pages, {} emails{error}",
            self.page_count,
            self.emails.len()
        )
    }

    /// Key metadata of each email, one line per email
    #[must_use]
    pub fn email_metadata(&self) -> Vec<String> {
        self.emails.iter().map(Email::info).collect()
    }
}
