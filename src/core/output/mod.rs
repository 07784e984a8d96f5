//! Chunk list writers.
//!
//! Everything here is built on a finished chunk list; none of it re-runs the
//! pipeline.
//!
//! - [`to_combined_text`] / [`write_combined_text`] - all chunks joined by a blank line
//! - [`to_json`] / [`write_json`] - pretty JSON array of chunks
//! - [`write_chunk_files`] - one `<stem>_part_<id>.txt` per chunk
//! - [`to_zip`] / [`write_zip`] - the per-chunk files in one archive - requires `zip-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> chatchunk::Result<()> {
//! use chatchunk::core::output::{Delivery, file_stem, write_delivery};
//! use chatchunk::{ChatExport, process_export};
//! use chatchunk::config::ProcessingConfig;
//! use std::path::Path;
//!
//! let export = ChatExport::from_path(Path::new("result.json"))?;
//! let chunks = process_export(&export, &ProcessingConfig::new());
//!
//! let stem = file_stem("result.json");
//! let written = write_delivery(&chunks, Path::new("out"), &stem, Delivery::Files)?;
//! println!("wrote {} files", written.len());
//! # Ok(())
//! # }
//! ```

mod json_writer;
mod text_writer;
#[cfg(feature = "zip-output")]
mod zip_writer;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::chunker::Chunk;
use crate::error::{ChatchunkError, Result};

pub use json_writer::{to_json, write_json};
pub use text_writer::{to_combined_text, write_chunk_files, write_combined_text};
#[cfg(feature = "zip-output")]
pub use zip_writer::{to_zip, write_zip};

/// How a chunk list is delivered to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delivery {
    /// One text file per chunk.
    #[default]
    Files,
    /// A single text file, chunks separated by a blank line.
    Combined,
    /// A single JSON file holding every chunk.
    Json,
    /// A zip archive of the per-chunk files.
    Zip,
}

impl std::fmt::Display for Delivery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Delivery::Files => write!(f, "per-chunk files"),
            Delivery::Combined => write!(f, "combined text"),
            Delivery::Json => write!(f, "combined JSON"),
            Delivery::Zip => write!(f, "zip archive"),
        }
    }
}

/// Derives the output name stem from an input file name.
///
/// A trailing `.json` is removed; other names are kept whole.
///
/// ```
/// use chatchunk::core::output::file_stem;
///
/// assert_eq!(file_stem("result.json"), "result");
/// assert_eq!(file_stem("chat.export.json"), "chat.export");
/// assert_eq!(file_stem("notes.txt"), "notes.txt");
/// ```
pub fn file_stem(file_name: &str) -> String {
    file_name
        .strip_suffix(".json")
        .unwrap_or(file_name)
        .to_string()
}

/// File name for one chunk: `<stem>_part_<id>.txt`.
pub fn part_file_name(stem: &str, chunk: &Chunk) -> String {
    format!("{}_part_{}.txt", stem, chunk.sequence_number)
}

/// File name for a combined output: `<stem>_combined.<ext>`.
pub fn combined_file_name(stem: &str, extension: &str) -> String {
    format!("{stem}_combined.{extension}")
}

/// File name for the archive: `<stem>_chunks.zip`.
pub fn archive_file_name(stem: &str) -> String {
    format!("{stem}_chunks.zip")
}

/// Writes `chunks` into `dir` the way `delivery` asks.
///
/// Creates `dir` if needed and returns the paths written.
pub fn write_delivery(
    chunks: &[Chunk],
    dir: &Path,
    stem: &str,
    delivery: Delivery,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;

    match delivery {
        Delivery::Files => write_chunk_files(chunks, dir, stem),
        Delivery::Combined => {
            let path = dir.join(combined_file_name(stem, "txt"));
            write_combined_text(chunks, &path)?;
            Ok(vec![path])
        }
        Delivery::Json => {
            let path = dir.join(combined_file_name(stem, "json"));
            write_json(chunks, &path)?;
            Ok(vec![path])
        }
        #[cfg(feature = "zip-output")]
        Delivery::Zip => {
            let path = dir.join(archive_file_name(stem));
            write_zip(chunks, &path, stem)?;
            Ok(vec![path])
        }
        #[allow(unreachable_patterns)]
        _ => Err(ChatchunkError::invalid_config(
            "delivery",
            format!("{delivery} requires the 'zip-output' feature to be enabled"),
        )),
    }
}
