//! Error types for email extraction

use thiserror::Error;

/// Errors that can occur while extracting emails from a document.
///
/// Per-page anomalies (no header, false positive header, orphan continuation
/// page) are not errors and never surface here.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The text converter could not produce pages for the document
    #[error("Failed to extract text from {document}: {details}")]
    Extraction { document: String, details: String },

    /// Failed to read or write a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize JSON output
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to write CSV output
    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid parser configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;
