mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use pdf_email_extract::{
    Document, ParserConfig, PlainText, Pdftotext, TextExtractor, document_id, to_json, write_csv,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, OutputFormat};

fn main() {
    init_tracing();

    if let Err(err) = run() {
        error!(error = %err, "command failed");
        for cause in err.chain().skip(1) {
            error!(cause = %cause, "caused by");
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.parser_config().context("failed to load parser configuration")?;

    let documents = if cli.text {
        extract_all(&cli.inputs, &PlainText, &config)
    } else {
        extract_all(&cli.inputs, &Pdftotext::with_program(&cli.pdftotext), &config)
    };

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    match cli.format {
        OutputFormat::Summary => {
            for document in &documents {
                writeln!(out, "{}: {}", document.document_id, document.info())?;
                for line in document.email_metadata() {
                    writeln!(out, "  {line}")?;
                }
            }
        }
        OutputFormat::Csv => {
            write_csv(&mut out, documents.iter().flat_map(|d| &d.emails))
                .context("failed to write CSV")?;
        }
        OutputFormat::Json => {
            writeln!(out, "{}", to_json(&documents)?)?;
        }
    }
    out.flush()?;

    Ok(())
}

// Documents are independent; a failed extraction is recorded and the rest continue.
fn extract_all(
    inputs: &[PathBuf],
    extractor: &impl TextExtractor,
    config: &ParserConfig,
) -> Vec<Document> {
    inputs
        .iter()
        .map(|path| {
            Document::extract(path, extractor, config)
                .unwrap_or_else(|err| Document::failed(document_id(path), &err))
        })
        .collect()
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
