//! Loading Telegram export files.
//!
//! Telegram Desktop exports a chat as JSON with the following structure:
//! ```json
//! {
//!   "name": "Chat Name",
//!   "type": "personal_chat",
//!   "messages": [
//!     {
//!       "id": 12345,
//!       "type": "message",
//!       "date": "2024-01-15T10:30:00",
//!       "from": "Sender Name",
//!       "from_id": "user123",
//!       "text": "Hello" | ["Hello", {"type": "link", "text": "url"}],
//!       "reply_to_message_id": 12344,
//!       "photo": "photos/photo_1.jpg"
//!     }
//!   ]
//! }
//! ```
//!
//! Loading is the only place where a bad export is rejected. Once a
//! [`ChatExport`] exists, processing it cannot fail.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::Message;
use crate::error::{ChatchunkError, Result};

/// A parsed chat export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatExport {
    /// Chat name, if the export carries one.
    #[serde(
        default,
        deserialize_with = "crate::message::lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,

    /// Messages in export order (assumed chronological).
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl ChatExport {
    /// Creates an export from an in-memory message list.
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            name: None,
            messages,
        }
    }

    /// Builder method to set the chat name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Parses an export from a JSON string.
    ///
    /// # Errors
    ///
    /// - [`ChatchunkError::Json`] for malformed JSON or a message of the wrong shape
    /// - [`ChatchunkError::InvalidFormat`] when there is no `messages` array
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatchunk::ChatExport;
    ///
    /// let export = ChatExport::from_json_str(r#"{"messages": []}"#)?;
    /// assert!(export.is_empty());
    ///
    /// assert!(ChatExport::from_json_str(r#"{"name": "x"}"#).is_err());
    /// # Ok::<(), chatchunk::ChatchunkError>(())
    /// ```
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        if !value.get("messages").is_some_and(Value::is_array) {
            return Err(ChatchunkError::invalid_export(
                "Could not find 'messages' array",
                None,
            ));
        }
        let export: ChatExport = serde_json::from_value(value)?;
        debug!(
            messages = export.messages.len(),
            name = export.name.as_deref().unwrap_or(""),
            "Loaded export"
        );
        Ok(export)
    }

    /// Reads and parses an export file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content).map_err(|e| e.with_path(path))
    }

    /// Returns the number of messages, retained or not.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if the export has no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl From<Vec<Message>> for ChatExport {
    fn from(messages: Vec<Message>) -> Self {
        Self::new(messages)
    }
}
