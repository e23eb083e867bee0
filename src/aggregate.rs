//! Cross-page email reassembly

use crate::page::{Email, ParsedPage};
use tracing::debug;

/// Merges parsed pages, in document order, into complete emails.
///
/// A header page starts a new email; a plain page continues the current one.
/// Plain pages seen before any header are discarded. Dropping the aggregator
/// without calling [`EmailAggregator::finish`] discards the email in flight.
#[derive(Debug, Default)]
pub struct EmailAggregator {
    document_id: String,
    current: Option<Email>,
    emails: Vec<Email>,
    pages_seen: usize,
}

impl EmailAggregator {
    #[must_use]
    pub fn new(document_id: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            ..Self::default()
        }
    }

    /// Feed the next page of the document
    pub fn push(&mut self, page: ParsedPage) {
        self.pages_seen += 1;
        let page_number = self.pages_seen;

        match page {
            ParsedPage::Email(mut email) => {
                self.flush();
                email.document_id.clone_from(&self.document_id);
                email.page_number = page_number;
                email.page_count = 1;
                self.current = Some(email);
            }
            ParsedPage::Page(page) => match self.current.as_mut() {
                Some(email) => {
                    email.body.push_str(&page.body);
                    email.page_count += 1;
                }
                None => debug!(page_number, "discarding page before first header"),
            },
        }
    }

    /// Number of emails completed so far, excluding the one in flight
    #[must_use]
    pub const fn completed(&self) -> usize {
        self.emails.len()
    }

    /// Flush the email in flight and return every email in header order
    #[must_use]
    pub fn finish(mut self) -> Vec<Email> {
        self.flush();
        self.emails
    }

    fn flush(&mut self) {
        if let Some(email) = self.current.take() {
            debug!(
                page_number = email.page_number,
                page_count = email.page_count,
                from = %email.header.from_email,
                "completed email"
            );
            self.emails.push(email);
        }
    }
}

impl Extend<ParsedPage> for EmailAggregator {
    fn extend<I: IntoIterator<Item = ParsedPage>>(&mut self, iter: I) {
        for page in iter {
            self.push(page);
        }
    }
}
