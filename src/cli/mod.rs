pub mod batch;
pub mod categories;
pub mod parse;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use colored::Colorize;

use crate::error::{CatatError, Result};
use crate::models::Confidence;

/// `--date` overrides "today" so output is reproducible; defaults to the
/// local calendar date.
pub(crate) fn resolve_today(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| CatatError::InvalidDate(raw.to_string())),
        None => Ok(Local::now().date_naive()),
    }
}

pub(crate) fn badge(confidence: Confidence) -> String {
    let label = confidence.label();
    match confidence {
        Confidence::High => label.green().to_string(),
        Confidence::Medium => label.yellow().to_string(),
        Confidence::Low => label.red().to_string(),
        Confidence::None => label.dimmed().to_string(),
    }
}

#[derive(Parser)]
#[command(name = "catat", about = "Log transactions from natural Indonesian text.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse one sentence into a transaction draft, e.g. "Beli bakso 20 ribu".
    Parse {
        /// The sentence to parse
        text: String,
        /// Override today's date: YYYY-MM-DD
        #[arg(long)]
        date: Option<String>,
        /// Emit the full parse result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Parse every non-empty line of a file ('-' for stdin).
    Batch {
        /// Path to a text file with one sentence per line
        file: String,
        /// Write recovered drafts to a CSV file
        #[arg(long)]
        csv: Option<String>,
        /// Emit all parse results as a JSON array
        #[arg(long)]
        json: bool,
        /// Override today's date: YYYY-MM-DD
        #[arg(long)]
        date: Option<String>,
    },
    /// Show the active category lexicon, including settings extras.
    Categories,
}
