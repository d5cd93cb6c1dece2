//! Configuration loading: TOML files merged over built-in defaults.

mod file_config;
mod loader;

pub use file_config::{FileConfig, FileGenerationConfig, FileModelConfig, FileTranscriptConfig};
pub use loader::ConfigLoader;
