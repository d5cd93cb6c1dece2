//! Streaming events for a generation operation.
//!
//! [`ResponseEvent`] represents individual events in a streaming model
//! response, enabling live display of output as it is generated.
//!
//! Text deltas accumulate into the streaming buffer; reasoning, audio, and
//! function-call events are observed but never mutate history. The stream is
//! finite and ends with [`Complete`](ResponseEvent::Complete) or
//! [`Error`](ResponseEvent::Error), or closes with no terminal event when
//! the operation is cancelled.

use super::entities::{ChatMessage, FunctionCall};
use serde::{Deserialize, Serialize};

/// Token accounting reported with a completed generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageStats {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Terminal payload of a successful generation.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    /// The final assistant message, possibly with non-text parts.
    pub message: ChatMessage,
    /// Usage stats when the runtime reports them.
    pub usage: Option<UsageStats>,
}

/// An event in a streaming model response.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseEvent {
    /// A text chunk of the in-progress assistant message.
    TextDelta(String),
    /// A chunk of the model's reasoning trace.
    ReasoningDelta(String),
    /// Synthesized audio samples.
    AudioSamples { samples: Vec<f32>, sample_rate: u32 },
    /// The model requests one or more function invocations.
    FunctionCalls(Vec<FunctionCall>),
    /// The full final message (signals stream end).
    Complete(Completion),
    /// An error that occurred during streaming (signals stream end).
    Error(String),
}

impl ResponseEvent {
    /// Returns the chunk text if this is a text delta.
    pub fn text_delta(&self) -> Option<&str> {
        match self {
            ResponseEvent::TextDelta(chunk) => Some(chunk),
            _ => None,
        }
    }

    /// Returns true if this event signals the end of the stream.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ResponseEvent::Complete(_) | ResponseEvent::Error(_))
    }
}
