//! Processing configuration.
//!
//! [`ProcessingConfig`] holds every option the chunking pipeline reads. It is
//! a plain builder-style struct with no CLI framework dependency and derives
//! serde so it can be embedded in other configuration files.
//!
//! # Example
//!
//! ```rust
//! use chatchunk::config::ProcessingConfig;
//! use chatchunk::format::OutputFormat;
//!
//! let config = ProcessingConfig::new()
//!     .with_chunk_size(20_000)
//!     .with_anonymize_users(false)
//!     .with_format(OutputFormat::Plain);
//!
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ChatchunkError, Result};
use crate::format::OutputFormat;

/// Default upper bound on chunk length, in UTF-16 code units.
pub const DEFAULT_CHUNK_SIZE: usize = 50_000;

/// Options for one pipeline run.
///
/// | Option | Default | Effect |
/// |--------|---------|--------|
/// | `chunk_size_chars` | 50 000 | approximate upper bound on chunk length |
/// | `anonymize_users` | `true` | replace senders with `User N` |
/// | `remove_system_messages` | `true` | drop events whose kind is not `"message"` |
/// | `include_timestamps` | `true` | render the display timestamp |
/// | `output_format` | `Transcript` | rendering strategy |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessingConfig {
    /// Approximate upper bound on a chunk's length in UTF-16 code units.
    ///
    /// A single unit longer than this still gets its own chunk.
    pub chunk_size_chars: usize,

    /// Replace sender identities with sequential pseudonyms.
    pub anonymize_users: bool,

    /// Drop messages whose kind is not `"message"`.
    pub remove_system_messages: bool,

    /// Render message timestamps.
    pub include_timestamps: bool,

    /// Rendering strategy.
    pub output_format: OutputFormat,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            chunk_size_chars: DEFAULT_CHUNK_SIZE,
            anonymize_users: true,
            remove_system_messages: true,
            include_timestamps: true,
            output_format: OutputFormat::Transcript,
        }
    }
}

impl ProcessingConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the chunk size bound.
    #[must_use]
    pub fn with_chunk_size(mut self, chars: usize) -> Self {
        self.chunk_size_chars = chars;
        self
    }

    /// Enables or disables sender anonymization.
    #[must_use]
    pub fn with_anonymize_users(mut self, enabled: bool) -> Self {
        self.anonymize_users = enabled;
        self
    }

    /// Sets whether service events are dropped.
    #[must_use]
    pub fn with_remove_system_messages(mut self, remove: bool) -> Self {
        self.remove_system_messages = remove;
        self
    }

    /// Sets whether timestamps are rendered.
    #[must_use]
    pub fn with_timestamps(mut self, include: bool) -> Self {
        self.include_timestamps = include;
        self
    }

    /// Sets the rendering format.
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Checks option ranges.
    ///
    /// The pipeline accepts any configuration; this is for callers that take
    /// options from users.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size_chars == 0 {
            return Err(ChatchunkError::invalid_config(
                "chunk_size_chars",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}
