//! Application layer for localchat
//!
//! Contains the session controller (the one component with real state),
//! plus the ports it consumes (inference provider, transcript logger) and
//! the observable event surface it produces for the presentation layer.
//!
//! The controller runs as a single actor task; presentation sends it
//! [`ChatCommand`]s and renders the [`ChatEvent`]s it emits. Provider
//! adapters live in the infrastructure layer.

pub mod config;
pub mod controller;
pub mod ports;

pub use config::ChatConfig;
pub use controller::{ChatCommand, ChatController};
pub use ports::inference::{
    Conversation, DownloadProgress, InferenceProvider, ModelRunner, ProviderError, ResponseStream,
};
pub use ports::transcript_logger::{NoTranscriptLogger, TranscriptEntry, TranscriptLogger};
pub use ports::ui_event::ChatEvent;
