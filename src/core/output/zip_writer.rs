//! Zip archive writer.
//!
//! Packs the per-chunk text files into one archive so a whole export can be
//! uploaded to a tool that takes one source per file.

use std::fs::File;
use std::io::{Cursor, Seek, Write};
use std::path::Path;

use tracing::debug;
use zip::write::SimpleFileOptions;

use super::part_file_name;
use crate::core::chunker::Chunk;
use crate::error::Result;

fn write_archive<W: Write + Seek>(writer: W, chunks: &[Chunk], stem: &str) -> Result<W> {
    let mut zip = zip::ZipWriter::new(writer);
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for chunk in chunks {
        zip.start_file(part_file_name(stem, chunk), options)?;
        zip.write_all(chunk.content.as_bytes())?;
    }

    Ok(zip.finish()?)
}

/// Builds the archive in memory.
///
/// Entries are named `<stem>_part_<id>.txt`, in chunk order.
pub fn to_zip(chunks: &[Chunk], stem: &str) -> Result<Vec<u8>> {
    let cursor = write_archive(Cursor::new(Vec::new()), chunks, stem)?;
    Ok(cursor.into_inner())
}

/// Writes the archive to `output_path`.
pub fn write_zip(chunks: &[Chunk], output_path: &Path, stem: &str) -> Result<()> {
    let file = File::create(output_path)?;
    write_archive(file, chunks, stem)?;
    debug!(path = %output_path.display(), entries = chunks.len(), "Wrote zip archive");
    Ok(())
}
