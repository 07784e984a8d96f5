//! Greedy size-bounded chunking.
//!
//! Units are packed in arrival order. A unit is never split: when it would
//! push a non-empty buffer past the bound, the buffer is closed first. A unit
//! longer than the bound on its own still gets a chunk of its own.
//!
//! Lengths are counted in UTF-16 code units, so an emoji outside the Basic
//! Multilingual Plane counts as two.
//!
//! # Example
//!
//! ```
//! use chatchunk::core::chunker::chunk_units;
//!
//! let units = ["Alice: a long enough line", "Bob: another long line"];
//! let chunks = chunk_units(&units, 10);
//!
//! assert_eq!(chunks.len(), 2);
//! assert_eq!(chunks[0].sequence_number, 1);
//! assert_eq!(chunks[1].content, "Bob: another long line");
//! ```

use serde::{Deserialize, Serialize};
use tracing::trace;

/// One bounded-size output document.
///
/// Serializes as `{"id", "content", "tokenEstimate", "messageCount"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chunk {
    /// 1-based position; gap-free within a run.
    #[serde(rename = "id")]
    pub sequence_number: usize,

    /// Concatenated units, trimmed of surrounding whitespace.
    pub content: String,

    /// Length-derived token estimate. Not a tokenizer.
    pub token_estimate: usize,

    /// Number of units in this chunk.
    pub message_count: usize,
}

/// Estimates tokens as `ceil(len / 3.5)` for a text of `len` code units.
///
/// ```
/// use chatchunk::core::chunker::estimate_tokens;
///
/// assert_eq!(estimate_tokens(0), 0);
/// assert_eq!(estimate_tokens(7), 2);
/// assert_eq!(estimate_tokens(8), 3);
/// ```
pub fn estimate_tokens(len: usize) -> usize {
    // len / 3.5 == 2 * len / 7
    (2 * len).div_ceil(7)
}

/// Length of `text` in UTF-16 code units.
///
/// ```
/// use chatchunk::core::chunker::text_len;
///
/// assert_eq!(text_len("abc"), 3);
/// assert_eq!(text_len("ПП"), 2);
/// assert_eq!(text_len("😀"), 2);
/// ```
pub fn text_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Fold state: the open buffer plus everything already closed.
#[derive(Debug, Default)]
struct ChunkAccumulator {
    buffer: String,
    buffer_len: usize,
    unit_count: usize,
    chunks: Vec<Chunk>,
}

impl ChunkAccumulator {
    fn push(mut self, unit: &str, chunk_size_chars: usize) -> Self {
        let unit_len = text_len(unit);
        if self.unit_count > 0 && self.buffer_len + unit_len > chunk_size_chars {
            self.close();
        }
        self.buffer.push_str(unit);
        self.buffer.push('\n');
        self.buffer_len += unit_len + 1;
        self.unit_count += 1;
        self
    }

    fn close(&mut self) {
        let raw = std::mem::take(&mut self.buffer);
        let raw_len = std::mem::take(&mut self.buffer_len);
        let unit_count = std::mem::take(&mut self.unit_count);

        let content = raw.trim();
        // Blank runs never become chunks.
        if content.is_empty() {
            return;
        }

        let chunk = Chunk {
            sequence_number: self.chunks.len() + 1,
            content: content.to_string(),
            token_estimate: estimate_tokens(raw_len),
            message_count: unit_count,
        };
        trace!(
            id = chunk.sequence_number,
            units = chunk.message_count,
            len = raw_len,
            "Closed chunk"
        );
        self.chunks.push(chunk);
    }

    fn finish(mut self) -> Vec<Chunk> {
        if self.unit_count > 0 {
            self.close();
        }
        self.chunks
    }
}

/// Packs units into chunks of at most roughly `chunk_size_chars` code units.
///
/// Each unit is followed by a `\n` separator in the raw buffer; the buffer
/// is trimmed when closed. `token_estimate` is computed on the raw buffer.
pub fn chunk_units<S: AsRef<str>>(units: &[S], chunk_size_chars: usize) -> Vec<Chunk> {
    units
        .iter()
        .fold(ChunkAccumulator::default(), |acc, unit| {
            acc.push(unit.as_ref(), chunk_size_chars)
        })
        .finish()
}
