//! Message filtering and text normalization.
//!
//! [`filter_messages`] is the first pipeline stage. It flattens each
//! message's text once and keeps the messages worth rendering.
//!
//! # Rules
//!
//! A message is dropped when either holds:
//! - `remove_system_messages` is set and its kind is not `"message"`
//! - its flattened text is empty **and** it has no photo or file
//!
//! Order is preserved; nothing is re-sorted.
//!
//! # Example
//!
//! ```
//! use chatchunk::core::filter::filter_messages;
//! use chatchunk::config::ProcessingConfig;
//! use chatchunk::Message;
//!
//! let messages = vec![
//!     Message::new(1, "Hello"),
//!     Message::service(2, "Alice joined"),
//!     Message::new(3, ""),
//!     Message::new(4, "").with_photo("photos/1.jpg"),
//! ];
//!
//! let kept = filter_messages(&messages, &ProcessingConfig::new());
//! let ids: Vec<i64> = kept.iter().map(|m| m.message.id).collect();
//! assert_eq!(ids, vec![1, 4]);
//! ```

use crate::Message;
use crate::config::ProcessingConfig;

/// A retained message paired with its flattened text.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedMessage<'a> {
    /// The source message.
    pub message: &'a Message,
    /// Flattened text; may be empty for media-only messages.
    pub text: String,
}

impl NormalizedMessage<'_> {
    /// Returns the text to render, substituting the media placeholder for
    /// empty text.
    pub fn display_text(&self) -> &str {
        if self.text.is_empty() {
            MEDIA_PLACEHOLDER
        } else {
            &self.text
        }
    }
}

/// Rendered in place of empty text on media-only messages.
pub const MEDIA_PLACEHOLDER: &str = "[Media Attachment]";

/// Returns the ordered sub-sequence of messages to render.
pub fn filter_messages<'a>(
    messages: &'a [Message],
    config: &ProcessingConfig,
) -> Vec<NormalizedMessage<'a>> {
    messages
        .iter()
        .filter(|msg| !config.remove_system_messages || msg.is_user_message())
        .filter_map(|message| {
            let text = message.text();
            if text.is_empty() && !message.has_media_attachment() {
                return None;
            }
            Some(NormalizedMessage { message, text })
        })
        .collect()
}
