//! Page text extraction from source documents

use crate::error::{ExtractError, Result};
use std::path::Path;
use std::process::Command;
use tracing::debug;

const FORM_FEED: char = '\u{000C}';

/// Produces the ordered page texts of one document
pub trait TextExtractor {
    /// Extract every page of `path`. Any failure is fatal for the document.
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>>;
}

/// Runs poppler's `pdftotext` in layout mode
#[derive(Debug, Clone)]
pub struct Pdftotext {
    program: String,
}

impl Default for Pdftotext {
    fn default() -> Self {
        Self {
            program: "pdftotext".into(),
        }
    }
}

impl Pdftotext {
    /// Use a specific `pdftotext` binary
    #[must_use]
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl TextExtractor for Pdftotext {
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>> {
        let failure = |details: String| ExtractError::Extraction {
            document: path.display().to_string(),
            details,
        };

        let output = Command::new(&self.program)
            .arg("-layout")
            .arg("-enc")
            .arg("UTF-8")
            .arg(path)
            .arg("-")
            .output()
            .map_err(|e| failure(format!("failed to execute {}: {e}", self.program)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(failure(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        let pages = split_pages(&String::from_utf8_lossy(&output.stdout));
        debug!(document = %path.display(), pages = pages.len(), "extracted pdf text");
        Ok(pages)
    }
}

/// Reads text that was already extracted, one page per form feed
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainText;

impl TextExtractor for PlainText {
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>> {
        let text = std::fs::read_to_string(path).map_err(|e| ExtractError::Extraction {
            document: path.display().to_string(),
            details: e.to_string(),
        })?;
        Ok(split_pages(&text))
    }
}

/// Split converter output into pages on form feeds.
///
/// The converter terminates every page with a form feed, so only the final
/// one is dropped; blank pages, including a blank last page, are kept.
#[must_use]
pub fn split_pages(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    text.strip_suffix(FORM_FEED)
        .unwrap_or(text)
        .split(FORM_FEED)
        .map(|chunk| chunk.replace('\u{0000}', ""))
        .collect()
}

/// Identifier used for a document read from `path`: its file name
#[must_use]
pub fn document_id(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
