// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! PDF Email Extractor
//!
//! Recovers structured email records from the text pages of a PDF made of
//! printed emails.
//!
//! # Features
//!
//! - Header detection tolerant of OCR spacing in field labels
//! - Multi-line header values and unrecognized header lines
//! - False positive rejection (a header needs a sender and a date)
//! - Reassembly of emails spanning several pages
//! - CSV and JSON export
//!
//! # Example
//!
//! ```rust
//! use pdf_email_extract::{Document, ParserConfig};
//!
//! let pages = [
//!     "From: yogi.bear@cartoon.com\nTo: booboo.bear@cartoon.com\nDate: 2021-03-25\n\nHi Booboo,\n",
//!     "see you at the ranger station.",
//! ];
//! let document = Document::from_pages("yogi.pdf", &pages, &ParserConfig::default());
//!
//! assert_eq!(document.emails.len(), 1);
//! assert_eq!(document.emails[0].page_count, 2);
//! println!("{}", document.info());
//! ```

mod aggregate;
mod config;
mod document;
mod error;
mod export;
mod extract;
mod header;
mod page;
mod token;

pub use aggregate::EmailAggregator;
pub use config::{DEFAULT_MAX_COLON_COLUMN, DEFAULT_MAX_START_LINE, ParserConfig};
pub use document::Document;
pub use error::{ExtractError, Result};
pub use export::{CSV_HEADER, to_json, write_csv};
pub use extract::{PlainText, Pdftotext, TextExtractor, document_id, split_pages};
pub use header::{
    Header, RawHeaderFields, find_header_start, parse_header, scan_header, validate_header,
};
pub use page::{Email, Page, ParsedPage, parse_page};
pub use token::{FieldToken, normalize_label};
