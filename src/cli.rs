//! Command-line interface

use clap::{Parser, ValueEnum};
use pdf_email_extract::{ParserConfig, Result};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pdf-email-extract",
    version,
    about = "Extract emails from PDFs of printed emails"
)]
pub struct Cli {
    /// PDF files (or form-feed separated text files with --text)
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary)]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Inputs are already-extracted text, one page per form feed
    #[arg(long, default_value_t = false)]
    pub text: bool,

    /// pdftotext binary to run
    #[arg(long, default_value = "pdftotext")]
    pub pdftotext: String,

    /// TOML file with parser bounds
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the number of leading lines that may start a header
    #[arg(long)]
    pub max_start_line: Option<usize>,

    /// Override the column bound for the header label colon
    #[arg(long)]
    pub max_colon_column: Option<usize>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// One line per document plus one per email
    Summary,
    Csv,
    Json,
}

impl Cli {
    /// Parser bounds from the config file, then command-line overrides
    pub fn parser_config(&self) -> Result<ParserConfig> {
        let mut config = match &self.config {
            Some(path) => ParserConfig::load(path)?,
            None => ParserConfig::default(),
        };
        if let Some(max_start_line) = self.max_start_line {
            config.max_start_line = max_start_line;
        }
        if let Some(max_colon_column) = self.max_colon_column {
            config.max_colon_column = max_colon_column;
        }
        config.validate()?;
        Ok(config)
    }
}
