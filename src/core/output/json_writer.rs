//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::chunker::Chunk;
use crate::error::Result;

/// Writes every chunk to a JSON file as a pretty-printed array.
///
/// # Format
/// ```json
/// [
///   {"id": 1, "content": "...", "tokenEstimate": 12, "messageCount": 3},
///   {"id": 2, "content": "...", "tokenEstimate": 9, "messageCount": 2}
/// ]
/// ```
pub fn write_json(chunks: &[Chunk], output_path: &Path) -> Result<()> {
    let json = to_json(chunks)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts chunks to a pretty JSON array string.
///
/// Same format as `write_json`, but returns a String instead of writing to file.
pub fn to_json(chunks: &[Chunk]) -> Result<String> {
    Ok(serde_json::to_string_pretty(chunks)?)
}
