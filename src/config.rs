//! Parser configuration

use crate::error::{ExtractError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default number of leading lines searched for the start of a header
pub const DEFAULT_MAX_START_LINE: usize = 12;

/// Default right-most column (exclusive) in which a header start colon may appear
pub const DEFAULT_MAX_COLON_COLUMN: usize = 14;

/// Bounds used when locating the start of an email header on a page.
///
/// Real headers are front-loaded and left-aligned, so both the line depth
/// and the colon column are bounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParserConfig {
    /// Number of lines from the top of the page that may start a header
    pub max_start_line: usize,

    /// Number of leading characters of a line searched for the label colon
    pub max_colon_column: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_start_line: DEFAULT_MAX_START_LINE,
            max_colon_column: DEFAULT_MAX_COLON_COLUMN,
        }
    }
}

impl ParserConfig {
    /// Parse a configuration from TOML text. Missing keys keep their defaults.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| ExtractError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Reject bounds that could never detect a header
    pub fn validate(&self) -> Result<()> {
        if self.max_start_line == 0 {
            return Err(ExtractError::Config("max_start_line must be at least 1".into()));
        }
        if self.max_colon_column == 0 {
            return Err(ExtractError::Config("max_colon_column must be at least 1".into()));
        }
        Ok(())
    }
}
