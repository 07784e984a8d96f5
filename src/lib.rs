//! # Chatchunk
//!
//! A Rust library for turning Telegram chat exports into size-bounded text
//! chunks ready for LLM context windows and notebook-style research tools.
//!
//! ## Overview
//!
//! A run goes through four stages, each a linear pass that never reorders
//! messages:
//!
//! 1. **Filter** - flatten rich text, drop service events and empty messages
//! 2. **Label** - resolve each sender to a `User N` pseudonym or display name
//! 3. **Render** - build units in transcript, plain or structured form
//! 4. **Chunk** - pack units greedily into chunks of a bounded length
//!
//! Loading an export is the only fallible step. Once a [`ChatExport`] is in
//! memory, processing it is total and deterministic.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatchunk::prelude::*;
//! use std::path::Path;
//!
//! fn main() -> Result<()> {
//!     let export = ChatExport::from_path(Path::new("result.json"))?;
//!
//!     let config = ProcessingConfig::new()
//!         .with_chunk_size(20_000)
//!         .with_format(OutputFormat::Plain);
//!     config.validate()?;
//!
//!     let chunks = process_export(&export, &config);
//!     write_json(&chunks, Path::new("result_combined.json"))?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## In-memory Exports
//!
//! ```rust
//! use chatchunk::prelude::*;
//!
//! let export = ChatExport::new(vec![
//!     Message::new(1, "Hello").with_sender("user1", "Alice"),
//!     Message::new(2, "How are you?").with_sender("user1", "Alice"),
//!     Message::new(3, "Fine!").with_sender("user2", "Bob"),
//! ]);
//!
//! let config = ProcessingConfig::new().with_timestamps(false);
//! let chunks = process_export(&export, &config);
//!
//! assert_eq!(chunks.len(), 1);
//! assert_eq!(chunks[0].message_count, 2);
//! assert!(chunks[0].content.starts_with("**User 1**:\nHello\nHow are you?"));
//! ```
//!
//! ## Module Structure
//!
//! - [`export`] - [`ChatExport`] loading and validation
//! - [`message`] - [`Message`], [`TextContent`](message::TextContent), [`normalize_text`](message::normalize_text)
//! - [`config`] - [`ProcessingConfig`](config::ProcessingConfig)
//! - [`format`] - [`OutputFormat`](format::OutputFormat)
//! - [`core`] - Pipeline stages and writers
//!   - [`core::filter`] - [`filter_messages`](core::filter_messages)
//!   - [`core::anonymizer`] - [`SenderLabels`](core::SenderLabels)
//!   - [`core::render`] - [`render_units`](core::render_units)
//!   - [`core::chunker`] - [`Chunk`], [`chunk_units`](core::chunk_units)
//!   - [`core::processor`] - [`process_export`], [`ProcessingStats`](core::ProcessingStats)
//!   - [`core::output`] - combined text, JSON, per-chunk files, zip
//! - [`cli`] - CLI types (requires `cli` feature)
//! - [`error`] - Unified error types ([`ChatchunkError`], [`Result`])
//! - [`prelude`] - Convenient re-exports
//!
//! ## Feature Flags
//!
//! | Feature | Description | Dependencies |
//! |---------|-------------|--------------|
//! | `full` | Everything (default) | all below |
//! | `zip-output` | Zip archive of chunk files | `zip` |
//! | `cli` | Command-line binary | `clap`, `tracing-subscriber` |
//! | `gen-test` | Synthetic export generator binary | `rand` |

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod export;
pub mod format;
pub mod message;

// Re-export the main types at the crate root for convenience
pub use crate::core::{Chunk, process_export};
pub use error::{ChatchunkError, Result};
pub use export::ChatExport;
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatchunk::prelude::*;
/// ```
pub mod prelude {
    // Input types
    pub use crate::export::ChatExport;
    pub use crate::message::{Fragment, Message, TextContent, normalize_text};

    // Error types
    pub use crate::error::{ChatchunkError, Result};

    // Configuration
    pub use crate::config::{DEFAULT_CHUNK_SIZE, ProcessingConfig};
    pub use crate::format::OutputFormat;

    // Pipeline
    pub use crate::core::{
        Chunk, ProcessingStats, SenderLabels, chunk_units, estimate_tokens, filter_messages,
        process_export, process_with_stats, render_units, text_len,
    };

    // Output (file writers and string converters)
    pub use crate::core::output::{
        Delivery, file_stem, to_combined_text, to_json, write_chunk_files, write_combined_text,
        write_delivery, write_json,
    };
    #[cfg(feature = "zip-output")]
    pub use crate::core::output::{to_zip, write_zip};
}
