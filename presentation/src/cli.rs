//! Command-line argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// Terminal chat over an on-device language model.
#[derive(Parser, Debug)]
#[command(name = "localchat", version, about)]
pub struct Cli {
    /// Model identifier to load (overrides config)
    #[arg(long)]
    pub model: Option<String>,

    /// Quantization profile (overrides config)
    #[arg(long)]
    pub quantization: Option<String>,

    /// System prompt for the conversation (overrides config)
    #[arg(long)]
    pub system_prompt: Option<String>,

    /// Sampling temperature (overrides config)
    #[arg(long)]
    pub temperature: Option<f32>,

    /// Explicit config file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable the JSONL conversation transcript
    #[arg(long)]
    pub no_transcript: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
