//! Port for structured transcript logging.
//!
//! Separate from `tracing`-based diagnostics: tracing carries human-readable
//! operational messages, while this port captures the conversation itself in
//! a machine-readable format (one record per event).

use serde_json::Value;

/// A structured transcript entry.
pub struct TranscriptEntry {
    /// Entry type identifier (e.g. "user_message", "assistant_message").
    pub entry_type: &'static str,
    /// JSON payload with entry-specific data.
    pub payload: Value,
}

impl TranscriptEntry {
    pub fn new(entry_type: &'static str, payload: Value) -> Self {
        Self {
            entry_type,
            payload,
        }
    }
}

/// Port for recording transcript entries.
///
/// The `log` method is intentionally synchronous and non-fallible: logging
/// must never disrupt the chat loop, so failures are silently ignored by
/// implementations.
pub trait TranscriptLogger: Send + Sync {
    fn log(&self, entry: TranscriptEntry);
}

/// No-op implementation for tests and when transcripts are disabled.
pub struct NoTranscriptLogger;

impl TranscriptLogger for NoTranscriptLogger {
    fn log(&self, _entry: TranscriptEntry) {}
}
