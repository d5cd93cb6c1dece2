//! Scripted offline inference runtime.
//!
//! Implements the provider port with simulated behavior: a paced download
//! with progress callbacks (including the repeated full-progress report real
//! SDKs emit), word-by-word streamed replies, prompt cancellation, and a
//! canonical history the conversation maintains itself.

use async_trait::async_trait;
use localchat_application::{
    Conversation, DownloadProgress, InferenceProvider, ModelRunner, ProviderError, ResponseStream,
};
use localchat_domain::util::truncate_str;
use localchat_domain::{
    ChatMessage, Completion, GenerationOptions, ModelSpec, ResponseEvent, UsageStats,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Offline stand-in for an on-device model runtime.
pub struct ScriptedProvider {
    download_steps: u32,
    step_delay: Duration,
    init_delay: Duration,
    reply_delay: Duration,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of progress reports the simulated download emits.
    pub fn with_download_steps(mut self, steps: u32) -> Self {
        self.download_steps = steps;
        self
    }

    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self
    }

    pub fn with_init_delay(mut self, delay: Duration) -> Self {
        self.init_delay = delay;
        self
    }

    /// Pacing between streamed reply chunks.
    pub fn with_reply_delay(mut self, delay: Duration) -> Self {
        self.reply_delay = delay;
        self
    }
}

impl Default for ScriptedProvider {
    fn default() -> Self {
        Self {
            download_steps: 24,
            step_delay: Duration::from_millis(50),
            init_delay: Duration::from_millis(350),
            reply_delay: Duration::from_millis(45),
        }
    }
}

#[async_trait]
impl InferenceProvider for ScriptedProvider {
    async fn load(
        &self,
        spec: &ModelSpec,
        progress: mpsc::UnboundedSender<DownloadProgress>,
    ) -> Result<Box<dyn ModelRunner>, ProviderError> {
        debug!(model = %spec, "starting simulated download");

        let steps = self.download_steps.max(1);
        for step in 1..=steps {
            tokio::time::sleep(self.step_delay).await;
            let fraction = f64::from(step) / f64::from(steps);
            // Synthetic but plausible throughput curve
            let bytes_per_sec = 1_800_000 + u64::from(step % 5) * 350_000;
            let _ = progress.send(DownloadProgress {
                fraction,
                bytes_per_sec,
            });
        }
        // Real SDKs tend to repeat the final callback; consumers must cope.
        let _ = progress.send(DownloadProgress {
            fraction: 1.0,
            bytes_per_sec: 0,
        });

        tokio::time::sleep(self.init_delay).await;
        debug!(model = %spec, "simulated runtime initialized");

        Ok(Box::new(ScriptedRunner {
            reply_delay: self.reply_delay,
        }))
    }
}

struct ScriptedRunner {
    reply_delay: Duration,
}

impl ModelRunner for ScriptedRunner {
    fn create_conversation(&self, system_prompt: &str) -> Arc<dyn Conversation> {
        debug!(
            "creating scripted conversation, system prompt: {}",
            truncate_str(system_prompt, 80)
        );
        Arc::new(ScriptedConversation {
            reply_delay: self.reply_delay,
            history: Arc::new(Mutex::new(Vec::new())),
        })
    }
}

struct ScriptedConversation {
    reply_delay: Duration,
    history: Arc<Mutex<Vec<ChatMessage>>>,
}

impl ScriptedConversation {
    fn compose_reply(text: &str) -> String {
        format!(
            "I'm a scripted on-device model, so I can't really reason about \"{}\", \
             but this reply streamed chunk by chunk just like a real one would.",
            text
        )
    }
}

#[async_trait]
impl Conversation for ScriptedConversation {
    async fn history(&self) -> Vec<ChatMessage> {
        self.history.lock().unwrap().clone()
    }

    async fn generate_response(
        &self,
        message: ChatMessage,
        _options: GenerationOptions,
        cancel: CancellationToken,
    ) -> Result<ResponseStream, ProviderError> {
        let reply = Self::compose_reply(&message.text());
        let chunks: Vec<String> = reply.split_inclusive(' ').map(str::to_string).collect();
        let prompt_tokens = message.text().split_whitespace().count() as u32;
        let completion_tokens = chunks.len() as u32;

        let (tx, rx) = mpsc::channel(32);
        let history = Arc::clone(&self.history);
        let delay = self.reply_delay;

        tokio::spawn(async move {
            for chunk in chunks {
                // Cancellation check per chunk, before pacing
                if cancel.is_cancelled() {
                    return;
                }
                tokio::select! {
                    _ = cancel.cancelled() => return,
                    _ = tokio::time::sleep(delay) => {}
                }
                if tx.send(ResponseEvent::TextDelta(chunk)).await.is_err() {
                    return;
                }
            }

            {
                let mut history = history.lock().unwrap();
                history.push(message);
                history.push(ChatMessage::assistant(reply.clone()));
            }

            let _ = tx
                .send(ResponseEvent::Complete(Completion {
                    message: ChatMessage::assistant(reply),
                    usage: Some(UsageStats {
                        prompt_tokens,
                        completion_tokens,
                        total_tokens: prompt_tokens + completion_tokens,
                    }),
                }))
                .await;
        });

        Ok(ResponseStream::new(rx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use localchat_domain::Role;

    fn instant_provider() -> ScriptedProvider {
        ScriptedProvider::new()
            .with_download_steps(4)
            .with_step_delay(Duration::ZERO)
            .with_init_delay(Duration::ZERO)
            .with_reply_delay(Duration::ZERO)
    }

    #[tokio::test]
    async fn load_reports_monotonic_progress_ending_at_full() {
        let provider = instant_provider();
        let (tx, mut rx) = mpsc::unbounded_channel();

        provider.load(&ModelSpec::default(), tx).await.unwrap();

        let mut reports = Vec::new();
        while let Ok(report) = rx.try_recv() {
            reports.push(report);
        }
        assert!(!reports.is_empty());
        assert!(
            reports
                .windows(2)
                .all(|pair| pair[0].fraction <= pair[1].fraction)
        );
        assert_eq!(reports.last().unwrap().fraction, 1.0);
        // The final report is repeated, as real SDK callbacks are.
        assert!(reports.iter().filter(|r| r.fraction >= 1.0).count() >= 2);
    }

    #[tokio::test]
    async fn deltas_concatenate_to_completion_text() {
        let provider = instant_provider();
        let (tx, _rx) = mpsc::unbounded_channel();
        let runner = provider.load(&ModelSpec::default(), tx).await.unwrap();
        let conversation = runner.create_conversation("be terse");

        let stream = conversation
            .generate_response(
                ChatMessage::user("hello"),
                GenerationOptions::default(),
                CancellationToken::new(),
            )
            .await
            .unwrap();

        let mut receiver = stream.receiver;
        let mut streamed = String::new();
        let mut final_text = None;
        while let Some(event) = receiver.recv().await {
            match event {
                ResponseEvent::TextDelta(chunk) => streamed.push_str(&chunk),
                ResponseEvent::Complete(completion) => {
                    final_text = Some(completion.message.text());
                }
                other => panic!("unexpected event: {:?}", other),
            }
        }
        assert_eq!(Some(streamed), final_text);
    }

    #[tokio::test]
    async fn completed_turn_lands_in_canonical_history() {
        let provider = instant_provider();
        let (tx, _rx) = mpsc::unbounded_channel();
        let runner = provider.load(&ModelSpec::default(), tx).await.unwrap();
        let conversation = runner.create_conversation("be terse");

        let stream = conversation
            .generate_response(
                ChatMessage::user("hello"),
                GenerationOptions::default(),
                CancellationToken::new(),
            )
            .await
            .unwrap();
        stream.collect_text().await.unwrap();

        let history = conversation.history().await;
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, Role::User);
        assert_eq!(history[0].text(), "hello");
        assert_eq!(history[1].role, Role::Assistant);
        assert!(!history[1].text().is_empty());
    }

    #[tokio::test]
    async fn cancellation_closes_stream_without_terminal_event() {
        let provider = instant_provider();
        let (tx, _rx) = mpsc::unbounded_channel();
        let runner = provider.load(&ModelSpec::default(), tx).await.unwrap();
        let conversation = runner.create_conversation("be terse");

        let cancel = CancellationToken::new();
        cancel.cancel();
        let stream = conversation
            .generate_response(
                ChatMessage::user("hello"),
                GenerationOptions::default(),
                cancel,
            )
            .await
            .unwrap();

        let mut receiver = stream.receiver;
        while let Some(event) = receiver.recv().await {
            assert!(!event.is_terminal(), "cancelled stream must not terminate normally");
        }
        // Nothing made it into canonical history
        assert!(conversation.history().await.is_empty());
    }
}
