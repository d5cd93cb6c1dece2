//! Model identity and generation parameters (provider-neutral).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a model and the quantization profile to load it with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSpec {
    /// Model identifier understood by the runtime, e.g. "LFM2-1.2B".
    pub id: String,
    /// Quantization profile, e.g. "Q5_K_M".
    pub quantization: String,
}

impl ModelSpec {
    pub fn new(id: impl Into<String>, quantization: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            quantization: quantization.into(),
        }
    }
}

impl Default for ModelSpec {
    fn default() -> Self {
        Self {
            id: "LFM2-1.2B".to_string(),
            quantization: "Q5_K_M".to_string(),
        }
    }
}

impl fmt::Display for ModelSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id, self.quantization)
    }
}

/// Sampling parameters passed to the runtime per generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub temperature: f32,
    /// Response length cap; `None` leaves it to the runtime.
    pub max_tokens: Option<u32>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_quantization() {
        let spec = ModelSpec::default();
        assert_eq!(spec.to_string(), "LFM2-1.2B (Q5_K_M)");
    }

    #[test]
    fn default_options() {
        let opts = GenerationOptions::default();
        assert_eq!(opts.temperature, 0.7);
        assert!(opts.max_tokens.is_none());
    }
}
