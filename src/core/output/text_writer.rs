//! Plain text output writers.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::part_file_name;
use crate::core::chunker::Chunk;
use crate::error::Result;

/// Separator between chunks in combined text.
const CHUNK_SEPARATOR: &str = "\n\n";

/// Joins every chunk's content with a blank line.
///
/// ```
/// use chatchunk::core::output::to_combined_text;
/// use chatchunk::core::chunk_units;
///
/// let chunks = chunk_units(&["first line", "second line"], 12);
/// assert_eq!(to_combined_text(&chunks), "first line\n\nsecond line");
/// ```
pub fn to_combined_text(chunks: &[Chunk]) -> String {
    chunks
        .iter()
        .map(|c| c.content.as_str())
        .collect::<Vec<_>>()
        .join(CHUNK_SEPARATOR)
}

/// Writes the combined text to a single file.
pub fn write_combined_text(chunks: &[Chunk], output_path: &Path) -> Result<()> {
    fs::write(output_path, to_combined_text(chunks))?;
    debug!(path = %output_path.display(), chunks = chunks.len(), "Wrote combined text");
    Ok(())
}

/// Writes each chunk to `<dir>/<stem>_part_<id>.txt`.
///
/// Returns the written paths in chunk order.
pub fn write_chunk_files(chunks: &[Chunk], dir: &Path, stem: &str) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(chunks.len());
    for chunk in chunks {
        let path = dir.join(part_file_name(stem, chunk));
        fs::write(&path, &chunk.content)?;
        written.push(path);
    }
    debug!(dir = %dir.display(), files = written.len(), "Wrote chunk files");
    Ok(written)
}
