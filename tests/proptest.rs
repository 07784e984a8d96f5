//! Property-based tests for chatchunk.
//!
//! These tests generate random exports and unit lists to check the
//! chunker's guarantees across all rendering formats.

use proptest::prelude::*;

use chatchunk::core::{SenderLabels, chunk_units, filter_messages, render_units};
use chatchunk::prelude::*;

/// Generate a random Message using fast strategies (no regex!)
fn arb_message() -> impl Strategy<Value = Message> {
    (
        1i64..10_000,
        // Sender id; empty means unattributed
        prop::sample::select(vec![
            String::new(),
            "user1".to_string(),
            "user2".to_string(),
            "user3".to_string(),
            "channel9".to_string(),
        ]),
        prop::sample::select(vec![
            String::new(),
            "Alice".to_string(),
            "Bob".to_string(),
            "Иван".to_string(),
        ]),
        prop::sample::select(vec![
            "Hello".to_string(),
            "Hi there!".to_string(),
            "How are you?".to_string(),
            "Test message 123".to_string(),
            "Привет мир".to_string(),
            String::new(),
            "   ".to_string(),
            "Special;chars\"here\nnewline".to_string(),
            "🎉🔥💀 emoji".to_string(),
            "A much longer message that easily exceeds a small chunk bound on its own".to_string(),
        ]),
        prop::sample::select(vec!["message", "message", "message", "service"]),
        any::<bool>(),
        prop::option::of(1i64..100),
    )
        .prop_map(|(id, sender_id, name, text, kind, photo, reply)| {
            let mut msg = Message::new(id, text)
                .with_sender(sender_id, name)
                .with_kind(kind)
                .with_timestamp("2024-01-15T10:30:00");
            if photo {
                msg = msg.with_photo("photos/p.jpg");
            }
            if let Some(reply_id) = reply {
                msg = msg.with_reply_to(reply_id);
            }
            msg
        })
}

/// Generate a vector of random messages
fn arb_messages(max_len: usize) -> impl Strategy<Value = Vec<Message>> {
    prop::collection::vec(arb_message(), 0..max_len)
}

fn arb_config() -> impl Strategy<Value = ProcessingConfig> {
    (
        prop::sample::select(OutputFormat::all().to_vec()),
        prop::sample::select(vec![0usize, 1, 10, 40, 100, 1000]),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(format, size, anonymize, remove_system, timestamps)| {
            ProcessingConfig::new()
                .with_format(format)
                .with_chunk_size(size)
                .with_anonymize_users(anonymize)
                .with_remove_system_messages(remove_system)
                .with_timestamps(timestamps)
        })
}

/// Non-blank units, as any renderer produces
fn arb_units(max_len: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::sample::select(vec![
            "User 1: hi".to_string(),
            "**User 2**:\nhello\nthere\n".to_string(),
            "{\"id\":1,\"user\":\"User 1\",\"content\":\"x\"}".to_string(),
            "Привет".to_string(),
            "User 3: 😀😀 ok".to_string(),
            "x".repeat(120),
            "  padded  ".to_string(),
        ]),
        0..max_len,
    )
}

fn rendered_units(messages: &[Message], config: &ProcessingConfig) -> Vec<String> {
    let kept = filter_messages(messages, config);
    render_units(&kept, config, &mut SenderLabels::new(config.anonymize_users))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // CHUNKER PROPERTIES
    // ============================================

    /// Chunk contents are the trimmed concatenation of their units
    #[test]
    fn chunks_reproduce_units(units in arb_units(30), size in 0usize..300) {
        let chunks = chunk_units(&units, size);

        let mut offset = 0;
        for chunk in &chunks {
            let raw: String = units[offset..offset + chunk.message_count]
                .iter()
                .map(|u| format!("{u}\n"))
                .collect();
            prop_assert_eq!(&chunk.content, raw.trim());
            prop_assert_eq!(chunk.token_estimate, estimate_tokens(text_len(&raw)));
            offset += chunk.message_count;
        }
        prop_assert_eq!(offset, units.len());
    }

    /// Sequence numbers are exactly 1..=N
    #[test]
    fn sequence_numbers_have_no_gaps(units in arb_units(30), size in 0usize..300) {
        let chunks = chunk_units(&units, size);
        for (i, chunk) in chunks.iter().enumerate() {
            prop_assert_eq!(chunk.sequence_number, i + 1);
        }
    }

    /// No empty chunks, every chunk holds at least one unit
    #[test]
    fn chunks_are_never_empty(units in arb_units(30), size in 0usize..300) {
        for chunk in chunk_units(&units, size) {
            prop_assert!(!chunk.content.is_empty());
            prop_assert!(chunk.message_count >= 1);
        }
    }

    /// A chunk only overshoots the bound when it holds a single unit
    #[test]
    fn overshoot_only_for_single_units(units in arb_units(30), size in 1usize..300) {
        for chunk in chunk_units(&units, size) {
            if text_len(&chunk.content) > size {
                prop_assert_eq!(chunk.message_count, 1);
            }
        }
    }

    // ============================================
    // PIPELINE PROPERTIES
    // ============================================

    /// Concatenating raw chunk buffers reproduces the full render
    #[test]
    fn pipeline_round_trips_render(messages in arb_messages(30), config in arb_config()) {
        let units = rendered_units(&messages, &config);
        let chunks = process_export(&ChatExport::new(messages), &config);

        prop_assert_eq!(
            chunks.iter().map(|c| c.message_count).sum::<usize>(),
            units.len()
        );

        let mut offset = 0;
        for chunk in &chunks {
            let raw: String = units[offset..offset + chunk.message_count]
                .iter()
                .map(|u| format!("{u}\n"))
                .collect();
            prop_assert_eq!(&chunk.content, raw.trim());
            offset += chunk.message_count;
        }
    }

    /// Same export and config always give identical chunks
    #[test]
    fn pipeline_is_idempotent(messages in arb_messages(30), config in arb_config()) {
        let export = ChatExport::new(messages);
        let first = process_export(&export, &config);
        let second = process_export(&export, &config);
        prop_assert_eq!(first, second);
    }

    /// Pipeline output satisfies the chunk invariants for any config
    #[test]
    fn pipeline_chunks_are_well_formed(messages in arb_messages(30), config in arb_config()) {
        let chunks = process_export(&ChatExport::new(messages), &config);
        for (i, chunk) in chunks.iter().enumerate() {
            prop_assert_eq!(chunk.sequence_number, i + 1);
            prop_assert!(!chunk.content.is_empty());
            prop_assert!(chunk.message_count >= 1);
        }
    }

    /// Service messages never appear when removal is on
    #[test]
    fn removed_service_messages_never_render(messages in arb_messages(30)) {
        let config = ProcessingConfig::new()
            .with_format(OutputFormat::Structured)
            .with_remove_system_messages(true);
        let service_ids: Vec<i64> = messages
            .iter()
            .filter(|m| !m.is_user_message())
            .map(|m| m.id)
            .filter(|id| messages.iter().all(|m| m.id != *id || !m.is_user_message()))
            .collect();

        for unit in rendered_units(&messages, &config) {
            let record: serde_json::Value = serde_json::from_str(&unit).unwrap();
            let id = record["id"].as_i64().unwrap();
            prop_assert!(!service_ids.contains(&id));
        }
    }

    /// Unattributed messages never consume a pseudonym
    #[test]
    fn system_label_consumes_no_number(messages in arb_messages(30)) {
        let config = ProcessingConfig::new().with_remove_system_messages(false);
        let kept = filter_messages(&messages, &config);
        let mut labels = SenderLabels::anonymized();

        let mut senders: Vec<String> = Vec::new();
        for msg in &kept {
            let label = labels.label(msg.message);
            if msg.message.is_unattributed() {
                prop_assert_eq!(label, "System");
            } else {
                let key = msg
                    .message
                    .sender_id()
                    .or_else(|| msg.message.display_name())
                    .unwrap_or_default()
                    .to_string();
                if !senders.contains(&key) {
                    senders.push(key.clone());
                }
                let n = senders.iter().position(|s| *s == key).unwrap_or_default() + 1;
                prop_assert_eq!(label, format!("User {n}"));
            }
        }
        prop_assert_eq!(labels.pseudonym_count(), senders.len());
    }
}
