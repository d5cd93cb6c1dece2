//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the config file. They are
//! deserialized directly and converted to the application's [`ChatConfig`].

use localchat_application::ChatConfig;
use localchat_domain::{GenerationOptions, ModelSpec};
use serde::{Deserialize, Serialize};

/// Top-level config file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub model: FileModelConfig,
    pub generation: FileGenerationConfig,
    pub transcript: FileTranscriptConfig,
}

impl FileConfig {
    /// Convert to the application-layer configuration.
    pub fn into_chat_config(self) -> ChatConfig {
        ChatConfig {
            model: ModelSpec::new(self.model.id, self.model.quantization),
            system_prompt: self.model.system_prompt,
            generation: GenerationOptions {
                temperature: self.generation.temperature,
                max_tokens: self.generation.max_tokens,
            },
        }
    }
}

/// Raw model configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelConfig {
    /// Model identifier understood by the runtime.
    pub id: String,
    /// Quantization profile.
    pub quantization: String,
    /// System prompt seeded into every conversation.
    pub system_prompt: String,
}

impl Default for FileModelConfig {
    fn default() -> Self {
        let spec = ModelSpec::default();
        Self {
            id: spec.id,
            quantization: spec.quantization,
            system_prompt: "You are a helpful travel assistant.".to_string(),
        }
    }
}

/// Raw generation configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    pub temperature: f32,
    pub max_tokens: Option<u32>,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        let opts = GenerationOptions::default();
        Self {
            temperature: opts.temperature,
            max_tokens: opts.max_tokens,
        }
    }
}

/// Raw transcript configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTranscriptConfig {
    /// Write a JSONL transcript of the conversation.
    pub enabled: bool,
    /// Transcript file path; defaults to the platform data directory.
    pub path: Option<String>,
}

impl Default for FileTranscriptConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_domain_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.model.id, "LFM2-1.2B");
        assert_eq!(config.model.quantization, "Q5_K_M");
        assert_eq!(config.generation.temperature, 0.7);
        assert!(config.transcript.enabled);
    }

    #[test]
    fn converts_to_chat_config() {
        let mut config = FileConfig::default();
        config.model.id = "tiny-test".to_string();
        config.generation.max_tokens = Some(256);

        let chat = config.into_chat_config();
        assert_eq!(chat.model.id, "tiny-test");
        assert_eq!(chat.generation.max_tokens, Some(256));
    }
}
