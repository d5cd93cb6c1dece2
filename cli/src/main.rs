//! CLI entrypoint for localchat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::Result;
use clap::Parser;
use localchat_application::{ChatCommand, ChatController, NoTranscriptLogger, TranscriptLogger};
use localchat_infrastructure::{ConfigLoader, JsonlTranscriptLogger, ScriptedProvider};
use localchat_presentation::{Cli, TuiApp};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level. Diagnostics go to a
    // file because the TUI owns the terminal.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };
    let log_dir = data_dir().join("logs");
    let _ = std::fs::create_dir_all(&log_dir);
    let appender = tracing_appender::rolling::never(&log_dir, "localchat.log");
    let (writer, _log_guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .init();

    info!("Starting localchat");

    // Load config, then apply CLI overrides on top
    let mut file_config = ConfigLoader::load(cli.config.as_ref())
        .map_err(|e| anyhow::anyhow!("failed to load config: {}", e))?;
    if let Some(model) = cli.model {
        file_config.model.id = model;
    }
    if let Some(quantization) = cli.quantization {
        file_config.model.quantization = quantization;
    }
    if let Some(system_prompt) = cli.system_prompt {
        file_config.model.system_prompt = system_prompt;
    }
    if let Some(temperature) = cli.temperature {
        file_config.generation.temperature = temperature;
    }

    let transcript_config = file_config.transcript.clone();
    let chat_config = file_config.into_chat_config();
    let model_name = chat_config.model.to_string();

    // === Dependency Injection ===
    let provider = Arc::new(ScriptedProvider::new());

    let transcript: Arc<dyn TranscriptLogger> = if cli.no_transcript || !transcript_config.enabled {
        Arc::new(NoTranscriptLogger)
    } else {
        let path = transcript_config
            .path
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir().join("transcript.jsonl"));
        match JsonlTranscriptLogger::new(&path) {
            Some(logger) => {
                info!("transcript: {}", logger.path().display());
                Arc::new(logger)
            }
            None => Arc::new(NoTranscriptLogger),
        }
    };

    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    let controller =
        ChatController::new(provider, chat_config, event_tx).with_transcript_logger(transcript);
    let controller_handle = tokio::spawn(controller.run(cmd_rx));

    // Kick off the model load immediately; Ctrl+R retries after a failure
    let _ = cmd_tx.send(ChatCommand::LoadModel);

    let mut app = TuiApp::new(cmd_tx.clone(), event_rx, model_name);
    app.run().await?;

    let _ = cmd_tx.send(ChatCommand::Quit);
    drop(cmd_tx);
    let _ = controller_handle.await;

    Ok(())
}

fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("localchat")
}
