//! Rendering format selection.
//!
//! [`OutputFormat`] picks how retained messages become rendering units before
//! chunking. It is a library type with no CLI framework dependency; the CLI
//! maps its own `ValueEnum` onto it.
//!
//! # Example
//!
//! ```rust
//! use chatchunk::format::OutputFormat;
//! use std::str::FromStr;
//!
//! let format = OutputFormat::from_str("notebooklm").unwrap();
//! assert_eq!(format, OutputFormat::Transcript);
//! assert_eq!(format.to_string(), "Transcript");
//! ```

use serde::{Deserialize, Serialize};

/// How messages are rendered into units.
///
/// | Format | Unit | Example |
/// |--------|------|---------|
/// | [`Transcript`](OutputFormat::Transcript) | one speaker block | `**User 1** (date):\nhi\nthere` |
/// | [`Plain`](OutputFormat::Plain) | one line per message | `[date] User 1 (Replying to msg 3): hi` |
/// | [`Structured`](OutputFormat::Structured) | one JSON record per message | `{"id":4,"user":"User 1","content":"hi"}` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Consecutive messages from one sender grouped under a bold header.
    ///
    /// Saves tokens on repeated names and reads like a transcript.
    #[default]
    #[serde(alias = "notebooklm")]
    Transcript,

    /// One `sender: text` line per message.
    #[serde(alias = "text", alias = "txt")]
    Plain,

    /// One JSON object per message (JSON Lines).
    #[serde(alias = "json", alias = "jsonl")]
    Structured,
}

impl OutputFormat {
    /// Returns all supported format names, including aliases.
    pub fn all_names() -> &'static [&'static str] {
        &[
            "transcript",
            "notebooklm",
            "plain",
            "text",
            "txt",
            "structured",
            "json",
            "jsonl",
        ]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[
            OutputFormat::Transcript,
            OutputFormat::Plain,
            OutputFormat::Structured,
        ]
    }

    /// Returns `true` when each unit is exactly one source message.
    ///
    /// Transcript blocks may merge several messages into one unit.
    pub fn is_line_per_message(&self) -> bool {
        !matches!(self, OutputFormat::Transcript)
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Transcript => write!(f, "Transcript"),
            OutputFormat::Plain => write!(f, "Plain"),
            OutputFormat::Structured => write!(f, "Structured"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "transcript" | "notebooklm" => Ok(OutputFormat::Transcript),
            "plain" | "text" | "txt" => Ok(OutputFormat::Plain),
            "structured" | "json" | "jsonl" => Ok(OutputFormat::Structured),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}
