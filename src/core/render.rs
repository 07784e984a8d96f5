//! Rendering retained messages into chunkable units.
//!
//! Every strategy is a single linear pass that never reorders messages.
//! Each returned string is one *unit*: the chunker never splits a unit.
//!
//! | Format | Unit |
//! |--------|------|
//! | Transcript | one speaker block, consecutive same-sender messages merged |
//! | Plain | one `[ts] sender (Replying to msg N): text` line per message |
//! | Structured | one JSON record per message |

use std::fmt;

use serde_json::Value;

use super::anonymizer::SenderLabels;
use super::filter::NormalizedMessage;
use crate::config::ProcessingConfig;
use crate::format::OutputFormat;

/// Renders messages with the strategy selected by `config.output_format`.
///
/// `labels` resolves sender names; pass a fresh one per run.
///
/// # Example
///
/// ```
/// use chatchunk::core::anonymizer::SenderLabels;
/// use chatchunk::core::filter::filter_messages;
/// use chatchunk::core::render::render_units;
/// use chatchunk::config::ProcessingConfig;
/// use chatchunk::format::OutputFormat;
/// use chatchunk::Message;
///
/// let messages = vec![
///     Message::new(1, "hi").with_sender_id("a"),
///     Message::new(2, "there").with_sender_id("a"),
/// ];
/// let config = ProcessingConfig::new()
///     .with_timestamps(false)
///     .with_format(OutputFormat::Transcript);
/// let kept = filter_messages(&messages, &config);
///
/// let units = render_units(&kept, &config, &mut SenderLabels::anonymized());
/// assert_eq!(units, vec!["**User 1**:\nhi\nthere\n"]);
/// ```
pub fn render_units(
    messages: &[NormalizedMessage<'_>],
    config: &ProcessingConfig,
    labels: &mut SenderLabels,
) -> Vec<String> {
    match config.output_format {
        OutputFormat::Transcript => render_transcript(messages, config.include_timestamps, labels),
        OutputFormat::Plain => render_plain(messages, config.include_timestamps, labels),
        OutputFormat::Structured => render_structured(messages, config.include_timestamps, labels),
    }
}

// ============================================================================
// Transcript
// ============================================================================

/// An open run of messages from one sender.
struct SpeakerBlock<'a> {
    sender: String,
    timestamp: &'a str,
    body: String,
}

impl SpeakerBlock<'_> {
    fn into_unit(self, include_timestamps: bool) -> String {
        let mut unit = format!("**{}**", self.sender);
        if include_timestamps {
            unit.push_str(&format!(" ({})", self.timestamp));
        }
        unit.push_str(":\n");
        unit.push_str(&self.body);
        // Trailing newline, plus the chunker's separator, leaves a blank
        // line between blocks.
        unit.push('\n');
        unit
    }
}

/// Groups consecutive messages from the same sender under one header.
///
/// The header carries the timestamp of the block's first message.
pub fn render_transcript(
    messages: &[NormalizedMessage<'_>],
    include_timestamps: bool,
    labels: &mut SenderLabels,
) -> Vec<String> {
    let mut blocks: Vec<SpeakerBlock<'_>> = Vec::new();

    for msg in messages {
        let sender = labels.label(msg.message);
        match blocks.last_mut() {
            Some(last) if last.sender == sender => {
                last.body.push('\n');
                last.body.push_str(msg.display_text());
            }
            _ => blocks.push(SpeakerBlock {
                sender,
                timestamp: &msg.message.timestamp,
                body: msg.display_text().to_string(),
            }),
        }
    }

    blocks
        .into_iter()
        .map(|block| block.into_unit(include_timestamps))
        .collect()
}

// ============================================================================
// Plain
// ============================================================================

/// Renders one `sender: text` line per message.
pub fn render_plain(
    messages: &[NormalizedMessage<'_>],
    include_timestamps: bool,
    labels: &mut SenderLabels,
) -> Vec<String> {
    messages
        .iter()
        .map(|msg| {
            let sender = labels.label(msg.message);
            let mut line = String::new();
            if include_timestamps {
                line.push_str(&format!("[{}] ", msg.message.timestamp));
            }
            line.push_str(&sender);
            if let Some(reply_id) = msg.message.reply_to_id {
                line.push_str(&format!(" (Replying to msg {reply_id})"));
            }
            line.push_str(": ");
            line.push_str(msg.display_text());
            line
        })
        .collect()
}

// ============================================================================
// Structured
// ============================================================================

/// One JSON Lines record. Absent options are omitted, not `null`.
struct StructuredRecord<'a> {
    id: i64,
    date: Option<&'a str>,
    user: &'a str,
    reply_to: Option<i64>,
    content: &'a str,
}

impl fmt::Display for StructuredRecord<'_> {
    // Writes compact JSON with keys in declaration order. String values are
    // escaped through `serde_json::Value`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{\"id\":{}", self.id)?;
        if let Some(date) = self.date {
            write!(f, ",\"date\":{}", Value::from(date))?;
        }
        write!(f, ",\"user\":{}", Value::from(self.user))?;
        if let Some(reply_to) = self.reply_to {
            write!(f, ",\"reply_to\":{reply_to}")?;
        }
        write!(f, ",\"content\":{}}}", Value::from(self.content))
    }
}

/// Renders one JSON object per message.
///
/// Keys appear as `id`, `date`, `user`, `reply_to`, `content`; `date` only
/// when timestamps are enabled, `reply_to` only when the source has one.
pub fn render_structured(
    messages: &[NormalizedMessage<'_>],
    include_timestamps: bool,
    labels: &mut SenderLabels,
) -> Vec<String> {
    messages
        .iter()
        .map(|msg| {
            let sender = labels.label(msg.message);
            let record = StructuredRecord {
                id: msg.message.id,
                date: include_timestamps.then_some(msg.message.timestamp.as_str()),
                user: &sender,
                reply_to: msg.message.reply_to_id,
                content: msg.display_text(),
            };
            record.to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Message;
    use crate::core::filter::filter_messages;

    fn render(messages: &[Message], config: &ProcessingConfig) -> Vec<String> {
        let kept = filter_messages(messages, config);
        render_units(&kept, config, &mut SenderLabels::new(config.anonymize_users))
    }

    fn config(format: OutputFormat) -> ProcessingConfig {
        ProcessingConfig::new()
            .with_format(format)
            .with_timestamps(false)
    }

    // =========================================================================
    // Transcript
    // =========================================================================

    #[test]
    fn test_transcript_merges_same_sender() {
        let messages = vec![
            Message::new(1, "hi").with_sender_id("A"),
            Message::new(2, "there").with_sender_id("A"),
            Message::new(3, "yo").with_sender_id("B"),
        ];
        let units = render(&messages, &config(OutputFormat::Transcript));
        assert_eq!(units, vec!["**User 1**:\nhi\nthere\n", "**User 2**:\nyo\n"]);
    }

    #[test]
    fn test_transcript_with_timestamp_uses_first_message() {
        let messages = vec![
            Message::new(1, "hi")
                .with_sender_id("A")
                .with_timestamp("2024-01-15T10:30:00"),
            Message::new(2, "there")
                .with_sender_id("A")
                .with_timestamp("2024-01-15T10:31:00"),
        ];
        let units = render(
            &messages,
            &config(OutputFormat::Transcript).with_timestamps(true),
        );
        assert_eq!(units, vec!["**User 1** (2024-01-15T10:30:00):\nhi\nthere\n"]);
    }

    #[test]
    fn test_transcript_alternating_senders_not_merged() {
        let messages = vec![
            Message::new(1, "a1").with_display_name("Alice"),
            Message::new(2, "b1").with_display_name("Bob"),
            Message::new(3, "a2").with_display_name("Alice"),
        ];
        let units = render(
            &messages,
            &config(OutputFormat::Transcript).with_anonymize_users(false),
        );
        assert_eq!(units.len(), 3);
        assert!(units[2].starts_with("**Alice**:\n"));
    }

    #[test]
    fn test_transcript_repeated_media() {
        let messages = vec![
            Message::new(1, "").with_sender_id("A").with_photo("p1.jpg"),
            Message::new(2, "").with_sender_id("A").with_photo("p2.jpg"),
        ];
        let units = render(&messages, &config(OutputFormat::Transcript));
        assert_eq!(
            units,
            vec!["**User 1**:\n[Media Attachment]\n[Media Attachment]\n"]
        );
    }

    #[test]
    fn test_transcript_merges_by_label_not_identity() {
        // Two senders without display names both render as "Unknown".
        let messages = vec![
            Message::new(1, "x").with_sender_id("a"),
            Message::new(2, "y").with_sender_id("b"),
        ];
        let units = render(
            &messages,
            &config(OutputFormat::Transcript).with_anonymize_users(false),
        );
        assert_eq!(units, vec!["**Unknown**:\nx\ny\n"]);
    }

    #[test]
    fn test_transcript_empty() {
        assert!(render(&[], &config(OutputFormat::Transcript)).is_empty());
    }

    // =========================================================================
    // Plain
    // =========================================================================

    #[test]
    fn test_plain_line() {
        let messages = vec![
            Message::new(1, "Hello").with_display_name("Alice"),
            Message::new(2, "Hi")
                .with_display_name("Bob")
                .with_reply_to(1),
        ];
        let units = render(
            &messages,
            &config(OutputFormat::Plain).with_anonymize_users(false),
        );
        assert_eq!(units, vec!["Alice: Hello", "Bob (Replying to msg 1): Hi"]);
    }

    #[test]
    fn test_plain_with_timestamp() {
        let messages = vec![
            Message::new(1, "Hello")
                .with_sender_id("a")
                .with_timestamp("2024-01-15T10:30:00"),
        ];
        let units = render(&messages, &config(OutputFormat::Plain).with_timestamps(true));
        assert_eq!(units, vec!["[2024-01-15T10:30:00] User 1: Hello"]);
    }

    #[test]
    fn test_plain_one_line_per_message_same_sender() {
        let messages = vec![
            Message::new(1, "a").with_sender_id("x"),
            Message::new(2, "b").with_sender_id("x"),
        ];
        let units = render(&messages, &config(OutputFormat::Plain));
        assert_eq!(units, vec!["User 1: a", "User 1: b"]);
    }

    #[test]
    fn test_plain_media_placeholder() {
        let messages = vec![Message::new(1, "").with_sender_id("a").with_file("doc.pdf")];
        let units = render(&messages, &config(OutputFormat::Plain));
        assert_eq!(units, vec!["User 1: [Media Attachment]"]);
    }

    // =========================================================================
    // Structured
    // =========================================================================

    #[test]
    fn test_structured_record_without_timestamp() {
        let messages = vec![
            Message::new(7, "Hello")
                .with_sender_id("a")
                .with_timestamp("2024-01-15T10:30:00"),
        ];
        let units = render(&messages, &config(OutputFormat::Structured));
        assert_eq!(units, vec![r#"{"id":7,"user":"User 1","content":"Hello"}"#]);
    }

    #[test]
    fn test_structured_record_with_timestamp_and_reply() {
        let messages = vec![
            Message::new(8, "Hi")
                .with_display_name("Bob")
                .with_timestamp("2024-01-15T10:31:00")
                .with_reply_to(7),
        ];
        let units = render(
            &messages,
            &config(OutputFormat::Structured)
                .with_timestamps(true)
                .with_anonymize_users(false),
        );
        assert_eq!(
            units,
            vec![r#"{"id":8,"date":"2024-01-15T10:31:00","user":"Bob","reply_to":7,"content":"Hi"}"#]
        );
    }

    #[test]
    fn test_structured_escapes_content() {
        let messages = vec![Message::new(1, "line1\n\"quoted\"").with_sender_id("a")];
        let units = render(&messages, &config(OutputFormat::Structured));
        let parsed: serde_json::Value = serde_json::from_str(&units[0]).unwrap();
        assert_eq!(parsed["content"], "line1\n\"quoted\"");
        assert!(!units[0].contains('\n'));
    }

    #[test]
    fn test_structured_escapes_control_characters() {
        let messages = vec![
            Message::new(-3, "tab\there\\back\u{1} 😀")
                .with_display_name("A \"B\"")
                .with_reply_to(0),
        ];
        let units = render(
            &messages,
            &config(OutputFormat::Structured).with_anonymize_users(false),
        );
        assert_eq!(
            units,
            vec![r#"{"id":-3,"user":"A \"B\"","reply_to":0,"content":"tab\there\\back\u0001 😀"}"#]
        );
        let parsed: serde_json::Value = serde_json::from_str(&units[0]).unwrap();
        assert_eq!(parsed["content"], "tab\there\\back\u{1} 😀");
    }
}
