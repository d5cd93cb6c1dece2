//! Chat session controller
//!
//! The one component with real state: owns the model-load lifecycle, the
//! conversation handle, message history, the streaming buffer, and the
//! single in-flight generation operation. Emits [`ChatEvent`]s to a channel
//! for the presentation layer to render.
//!
//! The controller runs as an actor: [`ChatController::run`] consumes a
//! command channel and is the only context that mutates state. Provider
//! progress callbacks and stream events originate on provider tasks and are
//! re-dispatched here via channels before touching anything observable.

use crate::config::ChatConfig;
use crate::ports::inference::{Conversation, DownloadProgress, InferenceProvider, ModelRunner};
use crate::ports::transcript_logger::{NoTranscriptLogger, TranscriptEntry, TranscriptLogger};
use crate::ports::ui_event::ChatEvent;
use localchat_domain::util::truncate_str;
use localchat_domain::{ChatMessage, Completion, LoadPhase, ResponseEvent};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Commands sent from the presentation layer to the controller task.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatCommand {
    /// Load (or retry loading) the configured model.
    LoadModel,
    /// Send a user message and start a generation.
    Send(String),
    /// Cancel the active generation, keeping any partial text.
    StopGeneration,
    /// Graceful shutdown.
    Quit,
}

/// The singleton in-flight generation operation.
///
/// Dropping the receiver doubles as a cancellation signal to the provider;
/// the token lets it stop generating promptly instead of discovering the
/// closed channel on its next send.
struct Generation {
    cancel: CancellationToken,
    events: mpsc::Receiver<ResponseEvent>,
}

/// What woke the actor loop.
enum Wake {
    Command(Option<ChatCommand>),
    Stream(Option<ResponseEvent>),
}

/// Session controller for a single chat.
///
/// At most one generation operation is active at any time; starting a new
/// one first cancels the previous (last-writer-wins, no queueing). The
/// streaming buffer is non-empty only while an operation is active or has
/// just completed/been stopped with unflushed text.
pub struct ChatController {
    provider: Arc<dyn InferenceProvider>,
    config: ChatConfig,
    /// Keeps the loaded model alive for the lifetime of the session.
    runner: Option<Box<dyn ModelRunner>>,
    conversation: Option<Arc<dyn Conversation>>,
    load_phase: LoadPhase,
    messages: Vec<ChatMessage>,
    /// Streaming buffer: accumulated text of the in-progress response.
    current_response: String,
    /// Retained human-readable error (load or generation).
    error_message: Option<String>,
    generation: Option<Generation>,
    events_tx: mpsc::UnboundedSender<ChatEvent>,
    transcript: Arc<dyn TranscriptLogger>,
}

impl ChatController {
    pub fn new(
        provider: Arc<dyn InferenceProvider>,
        config: ChatConfig,
        events_tx: mpsc::UnboundedSender<ChatEvent>,
    ) -> Self {
        Self {
            provider,
            config,
            runner: None,
            conversation: None,
            load_phase: LoadPhase::Idle,
            messages: Vec::new(),
            current_response: String::new(),
            error_message: None,
            generation: None,
            events_tx,
            transcript: Arc::new(NoTranscriptLogger),
        }
    }

    /// Set a transcript logger.
    pub fn with_transcript_logger(mut self, logger: Arc<dyn TranscriptLogger>) -> Self {
        self.transcript = logger;
        self
    }

    // === State snapshot accessors ===

    pub fn load_phase(&self) -> &LoadPhase {
        &self.load_phase
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn current_response(&self) -> &str {
        &self.current_response
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_generating(&self) -> bool {
        self.generation.is_some()
    }

    // === Actor loop ===

    /// Run the controller until the command channel closes or [`ChatCommand::Quit`].
    ///
    /// Commands are processed serially, so overlapping `load_model` calls
    /// cannot race; a second LoadModel queues behind the first and runs as a
    /// fresh attempt.
    pub async fn run(mut self, mut commands: mpsc::UnboundedReceiver<ChatCommand>) {
        loop {
            let wake = match self.generation.as_mut() {
                Some(generation) => tokio::select! {
                    command = commands.recv() => Wake::Command(command),
                    event = generation.events.recv() => Wake::Stream(event),
                },
                None => Wake::Command(commands.recv().await),
            };

            match wake {
                Wake::Command(None) => break,
                Wake::Command(Some(command)) => {
                    if self.handle_command(command).await {
                        break;
                    }
                }
                Wake::Stream(Some(event)) => self.apply_event(event).await,
                Wake::Stream(None) => {
                    // Stream closed without a terminal event: the provider
                    // side of a cancellation. Not a failure.
                    if self.generation.take().is_some() {
                        self.emit(ChatEvent::GenerationEnded);
                    }
                }
            }
        }
    }

    /// Handle one command. Returns true when the loop should exit.
    async fn handle_command(&mut self, command: ChatCommand) -> bool {
        match command {
            ChatCommand::LoadModel => self.load_model().await,
            ChatCommand::Send(text) => self.send(&text).await,
            ChatCommand::StopGeneration => self.stop_generation(),
            ChatCommand::Quit => return true,
        }
        false
    }

    // === Operations ===

    /// Load the configured model and create a conversation.
    ///
    /// Drives [`LoadPhase`] through its monotonic sequence, consuming
    /// provider progress reports while the load future is pending. The
    /// Downloading → Initializing transition fires exactly once per attempt
    /// even when full progress is reported repeatedly.
    pub async fn load_model(&mut self) {
        self.error_message = None;
        self.emit(ChatEvent::ErrorCleared);
        self.set_phase(LoadPhase::Downloading {
            fraction: 0.0,
            bytes_per_sec: 0,
        });

        let (progress_tx, mut progress_rx) = mpsc::unbounded_channel();
        let provider = Arc::clone(&self.provider);
        let spec = self.config.model.clone();
        info!(model = %spec, "loading model");

        let load = async move { provider.load(&spec, progress_tx).await };
        tokio::pin!(load);

        let mut download_completed = false;
        let mut progress_open = true;
        let result = loop {
            tokio::select! {
                report = progress_rx.recv(), if progress_open => match report {
                    Some(report) => self.apply_progress(report, &mut download_completed),
                    None => progress_open = false,
                },
                result = &mut load => break result,
            }
        };

        // Reports can still be queued when the load resolves first.
        while let Ok(report) = progress_rx.try_recv() {
            self.apply_progress(report, &mut download_completed);
        }

        match result {
            Ok(runner) => {
                // Cached models skip the download callbacks entirely.
                if !download_completed {
                    self.set_phase(LoadPhase::Initializing);
                }
                let conversation = runner.create_conversation(&self.config.system_prompt);
                self.runner = Some(runner);
                self.messages = conversation.history().await;
                self.conversation = Some(conversation);
                self.emit(ChatEvent::HistoryReplaced(self.messages.clone()));
                self.set_phase(LoadPhase::Ready);
                info!(model = %self.config.model, "model ready");
                self.transcript.log(TranscriptEntry::new(
                    "model_ready",
                    json!({ "model": self.config.model.id }),
                ));
            }
            Err(e) => {
                let reason = format!("Failed to load model: {}", e);
                warn!("{}", reason);
                self.error_message = Some(reason.clone());
                self.emit(ChatEvent::ErrorReported(reason.clone()));
                self.set_phase(LoadPhase::Failed { reason });
                self.transcript.log(TranscriptEntry::new(
                    "load_error",
                    json!({ "error": e.to_string() }),
                ));
            }
        }
    }

    fn apply_progress(&mut self, report: DownloadProgress, download_completed: &mut bool) {
        if report.fraction >= 1.0 {
            if !*download_completed {
                *download_completed = true;
                self.set_phase(LoadPhase::Initializing);
            }
        } else {
            self.set_phase(LoadPhase::Downloading {
                fraction: report.fraction,
                bytes_per_sec: report.bytes_per_sec,
            });
        }
    }

    /// Send a user message and start a generation operation.
    ///
    /// No-op unless a conversation is ready and the trimmed text is
    /// non-empty. Any active generation is cancelled first; its partial text
    /// is discarded, not flushed (only [`Self::stop_generation`] persists
    /// partials). The user message is appended optimistically before the
    /// provider acknowledges, and stays on failure (no rollback).
    pub async fn send(&mut self, text: &str) {
        let Some(conversation) = self.conversation.clone() else {
            return;
        };
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        self.cancel_generation();
        self.current_response.clear();
        self.emit(ChatEvent::StreamCleared);

        let user_message = ChatMessage::user(text);
        self.messages.push(user_message.clone());
        self.emit(ChatEvent::MessageAppended(user_message.clone()));
        self.transcript
            .log(TranscriptEntry::new("user_message", json!({ "text": text })));
        info!("sending message: {}", truncate_str(text, 80));

        let cancel = CancellationToken::new();
        match conversation
            .generate_response(user_message, self.config.generation.clone(), cancel.clone())
            .await
        {
            Ok(stream) => {
                self.generation = Some(Generation {
                    cancel,
                    events: stream.receiver,
                });
                self.emit(ChatEvent::GenerationStarted);
            }
            Err(e) => {
                let reason = format!("Generation failed: {}", e);
                warn!("{}", reason);
                self.error_message = Some(reason.clone());
                self.emit(ChatEvent::ErrorReported(reason));
                self.transcript.log(TranscriptEntry::new(
                    "generation_error",
                    json!({ "error": e.to_string() }),
                ));
            }
        }
    }

    /// Cancel the active generation and flush any partial response.
    ///
    /// This is the only path that persists a partial response: a non-empty
    /// streaming buffer becomes exactly one assistant message. Cancellation
    /// never touches the error channel.
    pub fn stop_generation(&mut self) {
        if let Some(generation) = self.generation.take() {
            generation.cancel.cancel();
            self.emit(ChatEvent::GenerationEnded);
            debug!("generation stopped by user");
        }

        if !self.current_response.is_empty() {
            let partial = ChatMessage::assistant(std::mem::take(&mut self.current_response));
            self.messages.push(partial.clone());
            self.emit(ChatEvent::MessageAppended(partial.clone()));
            self.emit(ChatEvent::StreamCleared);
            self.transcript.log(TranscriptEntry::new(
                "assistant_partial",
                json!({ "text": partial.text() }),
            ));
        }
    }

    /// Cancel without flushing: the supersession path used by `send`.
    fn cancel_generation(&mut self) {
        if let Some(generation) = self.generation.take() {
            generation.cancel.cancel();
            self.emit(ChatEvent::GenerationEnded);
            debug!("superseded active generation");
        }
    }

    // === Event handling ===

    /// Apply one event from the active generation's stream.
    ///
    /// Non-text events (reasoning, audio, function calls) are observed but
    /// never mutate history and never block the loop.
    pub async fn apply_event(&mut self, event: ResponseEvent) {
        match event {
            ResponseEvent::TextDelta(chunk) => {
                self.current_response.push_str(&chunk);
                self.emit(ChatEvent::StreamDelta(chunk));
            }
            ResponseEvent::ReasoningDelta(thought) => {
                debug!("reasoning: {}", truncate_str(&thought, 120));
            }
            ResponseEvent::AudioSamples {
                samples,
                sample_rate,
            } => {
                debug!(count = samples.len(), sample_rate, "received audio samples");
            }
            ResponseEvent::FunctionCalls(calls) => {
                debug!(count = calls.len(), "model requested function calls");
            }
            ResponseEvent::Complete(completion) => self.finish_generation(completion).await,
            ResponseEvent::Error(error) => {
                let reason = format!("Generation failed: {}", error);
                warn!("{}", reason);
                self.error_message = Some(reason.clone());
                self.emit(ChatEvent::ErrorReported(reason));
                self.transcript.log(TranscriptEntry::new(
                    "generation_error",
                    json!({ "error": error }),
                ));
                if self.generation.take().is_some() {
                    self.emit(ChatEvent::GenerationEnded);
                }
            }
        }
    }

    async fn finish_generation(&mut self, completion: Completion) {
        if let Some(stats) = completion.usage {
            debug!(total_tokens = stats.total_tokens, "generation complete");
        }

        let text = completion.message.text();
        if !text.is_empty() {
            let assistant = ChatMessage::assistant(text.clone());
            self.messages.push(assistant.clone());
            self.emit(ChatEvent::MessageAppended(assistant));
            self.transcript.log(TranscriptEntry::new(
                "assistant_message",
                json!({ "text": text }),
            ));
        }
        self.current_response.clear();
        self.emit(ChatEvent::StreamCleared);

        // Reconcile optimistic local state with the provider-tracked
        // history; the conversation is the source of truth once a turn
        // completes.
        if let Some(conversation) = self.conversation.clone() {
            self.messages = conversation.history().await;
            self.emit(ChatEvent::HistoryReplaced(self.messages.clone()));
        }

        if self.generation.take().is_some() {
            self.emit(ChatEvent::GenerationEnded);
        }
    }

    // === Helpers ===

    fn set_phase(&mut self, phase: LoadPhase) {
        self.load_phase = phase.clone();
        self.emit(ChatEvent::LoadPhaseChanged(phase));
    }

    fn emit(&self, event: ChatEvent) {
        // The receiver outlives the controller in normal operation; a closed
        // channel just means the presentation layer is gone.
        let _ = self.events_tx.send(event);
    }
}
