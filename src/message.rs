//! Message model for Telegram chat exports.
//!
//! This module provides [`Message`], one event from an export, and
//! [`TextContent`], the string-or-fragments shape Telegram uses for the
//! `text` field.
//!
//! # Overview
//!
//! A message carries:
//! - **Always**: `id`, `kind` (the export's `type`) and `timestamp` (the export's `date`)
//! - **Optional**: sender display name, sender id, text, reply reference, media references
//!
//! Only `kind == "message"` is authored content; everything else (joins,
//! pins, calls) is a service event.
//!
//! # Examples
//!
//! ```
//! use chatchunk::Message;
//!
//! let msg = Message::new(1, "Hello, world!")
//!     .with_sender("user42", "Alice")
//!     .with_timestamp("2024-01-15T10:30:00");
//!
//! assert!(msg.is_user_message());
//! assert_eq!(msg.text(), "Hello, world!");
//! assert_eq!(msg.display_name(), Some("Alice"));
//! ```
//!
//! ## Deserializing Telegram JSON
//!
//! ```
//! use chatchunk::Message;
//!
//! let json = r#"{
//!     "id": 7,
//!     "type": "message",
//!     "date": "2024-01-15T10:30:00",
//!     "from": "Alice",
//!     "from_id": "user1",
//!     "text": ["See ", {"type": "link", "text": "https://example.com"}]
//! }"#;
//! let msg: Message = serde_json::from_str(json)?;
//!
//! assert_eq!(msg.text(), "See https://example.com");
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The `kind` value that marks authored content.
pub const USER_MESSAGE_KIND: &str = "message";

/// One fragment of a rich-text `text` array.
///
/// Telegram splits formatted text into plain strings and entity objects
/// (`{"type": "bold", "text": "..."}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Fragment {
    /// A bare string fragment.
    Bare(String),

    /// An entity span; only its `text` is kept.
    Span {
        /// Visible text of the entity
        text: String,
    },

    /// Any other JSON value. Contributes nothing to the flattened text.
    Unsupported(Value),
}

impl Fragment {
    /// Returns the text this fragment contributes.
    pub fn as_str(&self) -> &str {
        match self {
            Fragment::Bare(s) | Fragment::Span { text: s } => s.as_str(),
            Fragment::Unsupported(_) => "",
        }
    }
}

/// The `text` field of a message: a plain string or a fragment sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextContent {
    /// Plain string text.
    Plain(String),

    /// Rich text split into fragments.
    Fragments(Vec<Fragment>),

    /// Any other JSON value (number, object, ...). Normalizes to `""`.
    Unsupported(Value),
}

impl From<&str> for TextContent {
    fn from(s: &str) -> Self {
        TextContent::Plain(s.to_string())
    }
}

impl From<String> for TextContent {
    fn from(s: String) -> Self {
        TextContent::Plain(s)
    }
}

impl From<Vec<Fragment>> for TextContent {
    fn from(fragments: Vec<Fragment>) -> Self {
        TextContent::Fragments(fragments)
    }
}

/// Flattens message content into a plain string.
///
/// - `Plain(s)` returns `s`
/// - `Fragments` concatenates each fragment's text in order, no separator
/// - anything else returns the empty string
///
/// # Example
///
/// ```
/// use chatchunk::message::{Fragment, TextContent, normalize_text};
///
/// let rich = TextContent::Fragments(vec![
///     Fragment::Span { text: "Important:".into() },
///     Fragment::Bare(" read this".into()),
/// ]);
/// assert_eq!(normalize_text(&rich), "Important: read this");
/// ```
pub fn normalize_text(content: &TextContent) -> String {
    match content {
        TextContent::Plain(s) => s.clone(),
        TextContent::Fragments(fragments) => fragments.iter().map(Fragment::as_str).collect(),
        TextContent::Unsupported(_) => String::new(),
    }
}

/// A single event from a Telegram export.
///
/// Field names follow the export on the wire (`type`, `date`, `from`,
/// `from_id`, `text`, `reply_to_message_id`); unknown fields are ignored.
///
/// A field of the wrong JSON type never fails the whole export. Numbers
/// read as strings keep their text form; anything else falls back to the
/// field's empty value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Message {
    /// Message identifier, unique within an export.
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: i64,

    /// Event classification. Only `"message"` is authored content.
    #[serde(rename = "type", default, deserialize_with = "lenient_text")]
    pub kind: String,

    /// Display timestamp, kept exactly as exported.
    #[serde(rename = "date", default, deserialize_with = "lenient_text")]
    pub timestamp: String,

    /// Sender display name.
    #[serde(
        rename = "from",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub sender_display_name: Option<String>,

    /// Stable sender identifier (e.g. `user123456`).
    #[serde(
        rename = "from_id",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub sender_id: Option<String>,

    /// Text content, plain or fragmented.
    #[serde(rename = "text", default, skip_serializing_if = "Option::is_none")]
    pub content: Option<TextContent>,

    /// ID of the message this one replies to. Not checked for existence.
    #[serde(
        rename = "reply_to_message_id",
        default,
        deserialize_with = "lenient_integer",
        skip_serializing_if = "Option::is_none"
    )]
    pub reply_to_id: Option<i64>,

    /// Attached file path, if any.
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub file: Option<String>,

    /// Attached photo path, if any.
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub photo: Option<String>,
}

impl Message {
    /// Creates an authored message with the given id and plain text.
    ///
    /// Sender fields are unset; the timestamp is empty.
    pub fn new(id: i64, text: impl Into<String>) -> Self {
        Self {
            id,
            kind: USER_MESSAGE_KIND.to_string(),
            content: Some(TextContent::Plain(text.into())),
            ..Self::default()
        }
    }

    /// Creates a service event (join, pin, ...) with the given text.
    pub fn service(id: i64, text: impl Into<String>) -> Self {
        Self {
            id,
            kind: "service".to_string(),
            content: Some(TextContent::Plain(text.into())),
            ..Self::default()
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Sets both sender id and display name.
    #[must_use]
    pub fn with_sender(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.sender_id = Some(id.into());
        self.sender_display_name = Some(name.into());
        self
    }

    /// Sets only the sender id.
    #[must_use]
    pub fn with_sender_id(mut self, id: impl Into<String>) -> Self {
        self.sender_id = Some(id.into());
        self
    }

    /// Sets only the sender display name.
    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.sender_display_name = Some(name.into());
        self
    }

    /// Sets the event kind.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Sets the display timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, ts: impl Into<String>) -> Self {
        self.timestamp = ts.into();
        self
    }

    /// Replaces the content.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<TextContent>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Sets the reply reference.
    #[must_use]
    pub fn with_reply_to(mut self, reply_id: i64) -> Self {
        self.reply_to_id = Some(reply_id);
        self
    }

    /// Attaches a photo reference.
    #[must_use]
    pub fn with_photo(mut self, path: impl Into<String>) -> Self {
        self.photo = Some(path.into());
        self
    }

    /// Attaches a file reference.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<String>) -> Self {
        self.file = Some(path.into());
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the flattened text, or `""` when there is none.
    pub fn text(&self) -> String {
        self.content.as_ref().map(normalize_text).unwrap_or_default()
    }

    /// Returns the sender id; empty strings count as absent.
    pub fn sender_id(&self) -> Option<&str> {
        non_empty(self.sender_id.as_deref())
    }

    /// Returns the display name; empty strings count as absent.
    pub fn display_name(&self) -> Option<&str> {
        non_empty(self.sender_display_name.as_deref())
    }

    /// Returns `true` when neither sender id nor display name is present.
    pub fn is_unattributed(&self) -> bool {
        self.sender_id().is_none() && self.display_name().is_none()
    }

    /// Returns `true` for authored content (`kind == "message"`).
    pub fn is_user_message(&self) -> bool {
        self.kind == USER_MESSAGE_KIND
    }

    /// Returns `true` if a photo or file reference is present.
    pub fn has_media_attachment(&self) -> bool {
        non_empty(self.photo.as_deref()).is_some() || non_empty(self.file.as_deref()).is_some()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

// ============================================================================
// Lenient field readers
// ============================================================================

pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_string(deserializer).map(Option::unwrap_or_default)
}

fn lenient_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_integer(deserializer).map(Option::unwrap_or_default)
}
