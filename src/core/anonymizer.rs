//! Sender label resolution and anonymization.
//!
//! [`SenderLabels`] turns a message's sender fields into the label that gets
//! rendered. With anonymization on, every distinct sender becomes `User N`,
//! numbered in order of first appearance among retained messages.
//!
//! State lives in the value, not in the process: build a fresh
//! [`SenderLabels`] per run and pseudonyms never carry over between exports.
//!
//! # Example
//!
//! ```
//! use chatchunk::core::anonymizer::SenderLabels;
//! use chatchunk::Message;
//!
//! let mut labels = SenderLabels::anonymized();
//! let alice = Message::new(1, "hi").with_sender("user1", "Alice");
//! let bob = Message::new(2, "yo").with_sender("user2", "Bob");
//! let join = Message::service(3, "Carol joined");
//!
//! assert_eq!(labels.label(&alice), "User 1");
//! assert_eq!(labels.label(&join), "System");
//! assert_eq!(labels.label(&bob), "User 2");
//! assert_eq!(labels.label(&alice), "User 1");
//! ```

use std::collections::HashMap;

use crate::Message;

/// Label for messages with neither sender id nor display name.
pub const SYSTEM_LABEL: &str = "System";

/// Label for messages without a display name when anonymization is off.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Fallback mapping key; unreachable in practice since unattributed
/// messages never enter the mapping.
const UNKNOWN_KEY: &str = "unknown";

/// Per-run mapping from sender key to sequential pseudonym.
#[derive(Debug, Clone)]
pub struct Anonymizer {
    pseudonyms: HashMap<String, String>,
    next_number: usize,
}

impl Anonymizer {
    /// Creates an empty mapping; the first sender becomes `User 1`.
    pub fn new() -> Self {
        Self {
            pseudonyms: HashMap::new(),
            next_number: 1,
        }
    }

    /// Returns the pseudonym for a message's sender, assigning one on first sight.
    ///
    /// The key is the sender id when present, else the display name.
    /// Unattributed messages get [`SYSTEM_LABEL`] and consume no number.
    pub fn pseudonym(&mut self, message: &Message) -> String {
        if message.is_unattributed() {
            return SYSTEM_LABEL.to_string();
        }

        let key = message
            .sender_id()
            .or_else(|| message.display_name())
            .unwrap_or(UNKNOWN_KEY);

        if let Some(existing) = self.pseudonyms.get(key) {
            return existing.clone();
        }

        let pseudonym = format!("User {}", self.next_number);
        self.next_number += 1;
        self.pseudonyms.insert(key.to_string(), pseudonym.clone());
        pseudonym
    }

    /// Number of distinct senders seen so far.
    pub fn len(&self) -> usize {
        self.pseudonyms.len()
    }

    /// Returns `true` if no sender has been mapped yet.
    pub fn is_empty(&self) -> bool {
        self.pseudonyms.is_empty()
    }
}

impl Default for Anonymizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves the rendered sender label for each message.
#[derive(Debug, Clone)]
pub enum SenderLabels {
    /// Senders replaced by `User N` pseudonyms.
    Anonymized(Anonymizer),
    /// Display names used as-is; [`UNKNOWN_LABEL`] when missing.
    Verbatim,
}

impl SenderLabels {
    /// Creates a resolver with a fresh pseudonym mapping.
    pub fn anonymized() -> Self {
        SenderLabels::Anonymized(Anonymizer::new())
    }

    /// Creates a resolver that keeps display names.
    pub fn verbatim() -> Self {
        SenderLabels::Verbatim
    }

    /// Creates the resolver matching `anonymize_users`.
    pub fn new(anonymize_users: bool) -> Self {
        if anonymize_users {
            Self::anonymized()
        } else {
            Self::verbatim()
        }
    }

    /// Returns the label to render for `message`.
    pub fn label(&mut self, message: &Message) -> String {
        match self {
            SenderLabels::Anonymized(anonymizer) => anonymizer.pseudonym(message),
            SenderLabels::Verbatim => message.display_name().unwrap_or(UNKNOWN_LABEL).to_string(),
        }
    }

    /// Number of pseudonyms assigned; always zero when verbatim.
    pub fn pseudonym_count(&self) -> usize {
        match self {
            SenderLabels::Anonymized(anonymizer) => anonymizer.len(),
            SenderLabels::Verbatim => 0,
        }
    }
}
