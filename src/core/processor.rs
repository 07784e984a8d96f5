use tracing::debug;

use super::anonymizer::SenderLabels;
use super::chunker::{Chunk, chunk_units};
use super::filter::filter_messages;
use super::render::render_units;
use crate::Message;
use crate::config::ProcessingConfig;
use crate::export::ChatExport;

/// Runs the full pipeline: filter, label, render, chunk.
///
/// Total and deterministic: the same export and config always give the same
/// chunks, and an export without messages gives an empty list.
///
/// # Example
///
/// ```
/// use chatchunk::{ChatExport, Message, process_export};
/// use chatchunk::config::ProcessingConfig;
///
/// let export = ChatExport::new(vec![
///     Message::new(1, "hi").with_sender_id("A"),
///     Message::new(2, "there").with_sender_id("A"),
///     Message::service(3, "X joined"),
/// ]);
/// let config = ProcessingConfig::new().with_timestamps(false);
///
/// let chunks = process_export(&export, &config);
/// assert_eq!(chunks.len(), 1);
/// assert_eq!(chunks[0].content, "**User 1**:\nhi\nthere");
/// ```
pub fn process_export(export: &ChatExport, config: &ProcessingConfig) -> Vec<Chunk> {
    process_messages(&export.messages, config).0
}

/// Same as [`process_export`], also returning per-stage counts.
pub fn process_with_stats(
    export: &ChatExport,
    config: &ProcessingConfig,
) -> (Vec<Chunk>, ProcessingStats) {
    process_messages(&export.messages, config)
}

/// Runs the pipeline over a bare message slice.
pub fn process_messages(
    messages: &[Message],
    config: &ProcessingConfig,
) -> (Vec<Chunk>, ProcessingStats) {
    let retained = filter_messages(messages, config);
    debug!(
        original = messages.len(),
        retained = retained.len(),
        "Filtered messages"
    );

    let mut labels = SenderLabels::new(config.anonymize_users);
    let units = render_units(&retained, config, &mut labels);
    debug!(
        format = %config.output_format,
        units = units.len(),
        pseudonyms = labels.pseudonym_count(),
        "Rendered units"
    );

    let chunks = chunk_units(&units, config.chunk_size_chars);
    debug!(
        chunks = chunks.len(),
        chunk_size = config.chunk_size_chars,
        "Chunked output"
    );

    let stats = ProcessingStats {
        original_count: messages.len(),
        retained_count: retained.len(),
        unit_count: units.len(),
        chunk_count: chunks.len(),
        token_estimate: chunks.iter().map(|c| c.token_estimate).sum(),
    };
    (chunks, stats)
}

/// Statistics about the processing result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessingStats {
    pub original_count: usize,
    pub retained_count: usize,
    pub unit_count: usize,
    pub chunk_count: usize,
    pub token_estimate: usize,
}

impl ProcessingStats {
    /// Percentage of export messages that survived filtering.
    pub fn retention_ratio(&self) -> f64 {
        if self.original_count == 0 {
            return 0.0;
        }
        (self.retained_count as f64 / self.original_count as f64) * 100.0
    }

    /// Percentage reduction from retained messages to rendered units.
    ///
    /// Non-zero only for transcript output, where same-sender runs merge.
    pub fn compression_ratio(&self) -> f64 {
        if self.retained_count == 0 {
            return 0.0;
        }
        (1.0 - (self.unit_count as f64 / self.retained_count as f64)) * 100.0
    }
}
