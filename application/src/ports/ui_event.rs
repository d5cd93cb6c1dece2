//! Observable events emitted by the session controller.
//!
//! These events form the output port from the application layer to the
//! presentation layer. The presentation layer folds them into its own view
//! state and re-renders; it holds no business rules.

use localchat_domain::{ChatMessage, LoadPhase};

/// Events emitted by [`ChatController`](crate::ChatController) for the
/// presentation layer to render.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatEvent {
    // === Load lifecycle ===
    /// The load phase changed (including download progress updates).
    LoadPhaseChanged(LoadPhase),

    // === History ===
    /// History was replaced wholesale from the conversation's canonical
    /// snapshot.
    HistoryReplaced(Vec<ChatMessage>),
    /// A single message was appended to history.
    MessageAppended(ChatMessage),

    // === Streaming ===
    /// A text chunk was appended to the streaming buffer.
    StreamDelta(String),
    /// The streaming buffer was cleared (flushed or discarded).
    StreamCleared,

    // === Generation lifecycle ===
    GenerationStarted,
    GenerationEnded,

    // === Errors ===
    /// A retained, human-readable error. Replaces any previous one.
    ErrorReported(String),
    /// The error channel was cleared (a new load attempt started).
    ErrorCleared,
}
