//! Unified error types for chatchunk.
//!
//! This module provides a single [`ChatchunkError`] enum that covers all error
//! cases in the library.
//!
//! # Where errors come from
//!
//! The chunking pipeline itself is total: missing senders, empty text and
//! unrecognized `text` shapes all degrade to defaults instead of failing.
//! Errors only appear at the edges:
//!
//! - **Loading** an export (unreadable file, malformed JSON, no `messages` array)
//! - **Validating** a [`ProcessingConfig`](crate::config::ProcessingConfig)
//! - **Writing** chunk files or archives

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatchunk operations.
///
/// # Example
///
/// ```rust
/// use chatchunk::error::Result;
/// use chatchunk::Chunk;
///
/// fn my_function() -> Result<Vec<Chunk>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatchunkError>;

/// The error type for all chatchunk operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatchunkError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON parsing/serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The export doesn't match the expected structure.
    ///
    /// Raised when the top-level JSON value has no `messages` array.
    #[error("Invalid {format} format: {message}{}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// A processing option is out of range.
    #[error("Invalid configuration for '{field}': {message}")]
    InvalidConfig {
        /// Name of the offending option
        field: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// Zip archive error.
    #[cfg(feature = "zip-output")]
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatchunkError {
    /// Creates an invalid format error for a Telegram export.
    pub fn invalid_export(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        ChatchunkError::InvalidFormat {
            format: "Telegram JSON",
            message: message.into(),
            path,
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(field: &'static str, message: impl Into<String>) -> Self {
        ChatchunkError::InvalidConfig {
            field,
            message: message.into(),
        }
    }

    /// Attaches a file path to an [`InvalidFormat`](Self::InvalidFormat) error.
    ///
    /// Other variants are returned unchanged.
    #[must_use]
    pub fn with_path(self, file: impl Into<PathBuf>) -> Self {
        match self {
            ChatchunkError::InvalidFormat {
                format, message, ..
            } => ChatchunkError::InvalidFormat {
                format,
                message,
                path: Some(file.into()),
            },
            other => other,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatchunkError::Io(_))
    }

    /// Returns `true` if this is a JSON error.
    pub fn is_json(&self) -> bool {
        matches!(self, ChatchunkError::Json(_))
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatchunkError::InvalidFormat { .. })
    }

    /// Returns `true` if this is a configuration error.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, ChatchunkError::InvalidConfig { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
