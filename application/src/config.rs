//! Application-level chat configuration.
//!
//! Assembled by the infrastructure config loader (file + env + CLI
//! overrides) and handed to the controller at construction.

use localchat_domain::{GenerationOptions, ModelSpec};

/// Everything the session controller needs to know up front.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatConfig {
    /// Model to load.
    pub model: ModelSpec,
    /// System prompt for new conversations.
    pub system_prompt: String,
    /// Sampling parameters for every generation.
    pub generation: GenerationOptions,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            model: ModelSpec::default(),
            system_prompt: "You are a helpful travel assistant.".to_string(),
            generation: GenerationOptions::default(),
        }
    }
}
