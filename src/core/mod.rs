//! Core processing logic for chatchunk.
//!
//! This module contains the four pipeline stages and the writers built on
//! their output:
//! - [`filter`] - Text normalization and message filtering
//! - [`anonymizer`] - Sender labels and `User N` pseudonyms
//! - [`render`] - Transcript, plain and structured rendering
//! - [`chunker`] - Greedy size-bounded chunking
//! - [`processor`] - The pipeline and its statistics
//! - [`output`] - Combined text, JSON, per-chunk files and zip archives
//!
//! # Quick Start
//!
//! ```rust
//! use chatchunk::core::{ProcessingStats, process_with_stats};
//! use chatchunk::config::ProcessingConfig;
//! use chatchunk::{ChatExport, Message};
//!
//! let export = ChatExport::new(vec![Message::new(1, "Hello").with_sender_id("a")]);
//! let (chunks, stats) = process_with_stats(&export, &ProcessingConfig::new());
//!
//! assert_eq!(stats.chunk_count, chunks.len());
//! ```

pub mod anonymizer;
pub mod chunker;
pub mod filter;
pub mod output;
pub mod processor;
pub mod render;

// Re-export main types for convenience
pub use anonymizer::{Anonymizer, SenderLabels};
pub use chunker::{Chunk, chunk_units, estimate_tokens, text_len};
pub use filter::{NormalizedMessage, filter_messages};
pub use processor::{ProcessingStats, process_export, process_messages, process_with_stats};
pub use render::render_units;

pub use output::{Delivery, to_combined_text, to_json, write_combined_text, write_json};
#[cfg(feature = "zip-output")]
pub use output::{to_zip, write_zip};
