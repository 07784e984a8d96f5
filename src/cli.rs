//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`Format`] - Rendering format options
//! - [`Mode`] - Where the chunks go
//!
//! # Turning Args into a run
//!
//! ```rust
//! use chatchunk::cli::Args;
//! use chatchunk::format::OutputFormat;
//! use clap::Parser;
//!
//! let args = Args::parse_from(["chatchunk", "result.json", "-f", "plain", "-c", "2000"]);
//! let config = args.processing_config();
//!
//! assert_eq!(config.output_format, OutputFormat::Plain);
//! assert_eq!(config.chunk_size_chars, 2000);
//! ```

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_CHUNK_SIZE, ProcessingConfig};
use crate::core::output::Delivery;

/// Split Telegram chat exports into size-bounded chunks
/// for LLM context windows and research notebooks.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatchunk")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatchunk result.json
    chatchunk result.json -o chunks/ -c 20000
    chatchunk result.json -f plain --no-anonymize
    chatchunk result.json -f structured -m json
    chatchunk result.json -m zip --keep-system
    chatchunk result.json -m stdout --no-timestamps")]
pub struct Args {
    /// Path to the Telegram JSON export
    pub input: String,

    /// Directory to write output files into
    #[arg(short, long, default_value = ".")]
    pub output: String,

    /// Rendering format
    #[arg(short, long, value_enum, default_value = "transcript")]
    pub format: Format,

    /// Approximate maximum chunk length (UTF-16 code units)
    #[arg(short = 'c', long, value_name = "CHARS", default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Keep real sender names instead of User N pseudonyms
    #[arg(long)]
    pub no_anonymize: bool,

    /// Keep service events (joins, pins, calls)
    #[arg(long)]
    pub keep_system: bool,

    /// Leave timestamps out of the rendered text
    #[arg(long)]
    pub no_timestamps: bool,

    /// Output mode
    #[arg(short, long, value_enum, default_value = "files")]
    pub mode: Mode,
}

impl Args {
    /// Builds the pipeline configuration these arguments describe.
    pub fn processing_config(&self) -> ProcessingConfig {
        ProcessingConfig::new()
            .with_chunk_size(self.chunk_size)
            .with_anonymize_users(!self.no_anonymize)
            .with_remove_system_messages(!self.keep_system)
            .with_timestamps(!self.no_timestamps)
            .with_format(self.format.into())
    }
}

/// Rendering format options.
///
/// - [`Transcript`](Format::Transcript) - Speaker blocks, best for notebook tools
/// - [`Plain`](Format::Plain) - One line per message
/// - [`Structured`](Format::Structured) - One JSON object per message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Consecutive messages grouped under a bold sender header (default)
    #[default]
    #[value(alias = "notebooklm")]
    Transcript,

    /// `[date] sender: text` lines
    #[value(alias = "text", alias = "txt")]
    Plain,

    /// JSON Lines records
    #[value(alias = "json", alias = "jsonl")]
    Structured,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Transcript => write!(f, "transcript"),
            Format::Plain => write!(f, "plain"),
            Format::Structured => write!(f, "structured"),
        }
    }
}

// Conversion to library format type
impl From<Format> for crate::format::OutputFormat {
    fn from(format: Format) -> crate::format::OutputFormat {
        match format {
            Format::Transcript => crate::format::OutputFormat::Transcript,
            Format::Plain => crate::format::OutputFormat::Plain,
            Format::Structured => crate::format::OutputFormat::Structured,
        }
    }
}

/// Where the chunk list is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// One `<stem>_part_<id>.txt` per chunk (default)
    #[default]
    Files,

    /// A single `<stem>_combined.txt`
    Combined,

    /// A single `<stem>_combined.json`
    Json,

    /// `<stem>_chunks.zip` with every part file
    Zip,

    /// Combined text on standard output, nothing written to disk
    Stdout,
}

impl Mode {
    /// The file delivery for this mode, or `None` for stdout.
    pub fn delivery(self) -> Option<Delivery> {
        match self {
            Mode::Files => Some(Delivery::Files),
            Mode::Combined => Some(Delivery::Combined),
            Mode::Json => Some(Delivery::Json),
            Mode::Zip => Some(Delivery::Zip),
            Mode::Stdout => None,
        }
    }
}
