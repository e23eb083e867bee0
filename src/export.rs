//! CSV and JSON output

use crate::document::Document;
use crate::error::Result;
use crate::page::Email;
use std::io::Write;

/// CSV column names, in output order
pub const CSV_HEADER: [&str; 15] = [
    "pdf file",
    "page number",
    "page count",
    "subject",
    "date",
    "from",
    "to",
    "cc",
    "bcc",
    "attachments",
    "importance",
    "body",
    "hdr begin",
    "hdr end",
    "unprocessed",
];

const LIST_SEPARATOR: &str = "; ";

impl Email {
    /// Flatten the email into one CSV record, in [`CSV_HEADER`] order
    #[must_use]
    pub fn flatten(&self) -> [String; 15] {
        let header = &self.header;
        [
            self.document_id.clone(),
            self.page_number.to_string(),
            self.page_count.to_string(),
            header.subject.clone().unwrap_or_default(),
            header.date.clone().unwrap_or_default(),
            header.from_email.clone(),
            header.to.join(LIST_SEPARATOR),
            header.cc.join(LIST_SEPARATOR),
            header.bcc.join(LIST_SEPARATOR),
            header.attachments.join(LIST_SEPARATOR),
            header.importance.clone().unwrap_or_default(),
            self.body.clone(),
            header.begin_ln.to_string(),
            header.end_ln.to_string(),
            header.unprocessed.join(LIST_SEPARATOR),
        ]
    }
}

/// Write emails as CSV. Nothing is written when there are no emails.
pub fn write_csv<'a, W, I>(writer: W, emails: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Email>,
{
    let mut emails = emails.into_iter().peekable();
    if emails.peek().is_none() {
        return Ok(());
    }

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADER)?;
    for email in emails {
        csv_writer.write_record(email.flatten())?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Pretty-printed JSON for a set of documents
pub fn to_json(documents: &[Document]) -> Result<String> {
    Ok(serde_json::to_string_pretty(documents)?)
}
