//! Infrastructure layer for localchat
//!
//! Adapters for the application layer's ports: configuration loading
//! (TOML + defaults via figment), the JSONL transcript logger, and the
//! scripted offline inference provider that stands in for a real on-device
//! runtime SDK.

pub mod config;
pub mod logging;
pub mod provider;

pub use config::{ConfigLoader, FileConfig};
pub use logging::JsonlTranscriptLogger;
pub use provider::ScriptedProvider;
