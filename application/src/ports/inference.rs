//! Inference provider port
//!
//! Defines the interface for communicating with the on-device model runtime.
//! Model acquisition, tokenization, and sampling are entirely the provider's
//! concern; this layer only consumes the contract below.

use async_trait::async_trait;
use localchat_domain::{ChatMessage, GenerationOptions, ModelSpec, ResponseEvent};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Errors that can occur during provider operations
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Download error: {0}")]
    DownloadError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Model error: {0}")]
    ModelError(String),

    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// A download progress report from the provider.
///
/// `fraction` is in `[0, 1]`. Providers may report `1.0` more than once;
/// consumers must treat the first such report as the download→initialize
/// boundary and ignore the rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DownloadProgress {
    pub fraction: f64,
    pub bytes_per_sec: u64,
}

/// Handle for receiving streaming events from a generation operation.
///
/// Wraps an `mpsc::Receiver<ResponseEvent>`. The stream is finite: it ends
/// with a terminal event, or closes without one when the operation is
/// cancelled. Dropping the handle is itself a cancellation signal: the
/// provider's send fails and its pump task stops.
pub struct ResponseStream {
    pub receiver: mpsc::Receiver<ResponseEvent>,
}

impl ResponseStream {
    pub fn new(receiver: mpsc::Receiver<ResponseEvent>) -> Self {
        Self { receiver }
    }

    /// Consume the stream and collect all text deltas into a single string.
    ///
    /// Useful when streaming granularity is not needed (e.g. scripted
    /// provider tests). Returns the completion's final text when no deltas
    /// were observed.
    pub async fn collect_text(mut self) -> Result<String, ProviderError> {
        let mut full_text = String::new();
        while let Some(event) = self.receiver.recv().await {
            match event {
                ResponseEvent::TextDelta(chunk) => full_text.push_str(&chunk),
                ResponseEvent::Complete(completion) => {
                    if full_text.is_empty() {
                        return Ok(completion.message.text());
                    }
                    return Ok(full_text);
                }
                ResponseEvent::Error(e) => {
                    return Err(ProviderError::GenerationFailed(e));
                }
                _ => {}
            }
        }
        // Channel closed without a terminal event: cancelled; return what we have
        Ok(full_text)
    }
}

/// Gateway to the model runtime.
///
/// This port defines how the application layer acquires a model.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait InferenceProvider: Send + Sync {
    /// Load (downloading if necessary) the given model.
    ///
    /// Progress reports are pushed to `progress` from the provider's own
    /// tasks; the caller re-dispatches them onto its own context. The future
    /// resolves once the runtime is usable or the attempt failed.
    async fn load(
        &self,
        spec: &ModelSpec,
        progress: mpsc::UnboundedSender<DownloadProgress>,
    ) -> Result<Box<dyn ModelRunner>, ProviderError>;
}

/// A loaded model instance.
pub trait ModelRunner: Send + Sync {
    /// Create a conversation seeded with a system prompt.
    fn create_conversation(&self, system_prompt: &str) -> Arc<dyn Conversation>;
}

/// An active conversation tracked by the provider.
#[async_trait]
pub trait Conversation: Send + Sync {
    /// Point-in-time snapshot of the canonical turn history.
    async fn history(&self) -> Vec<ChatMessage>;

    /// Start a generation for `message` and return its event stream.
    ///
    /// The provider must stop generating promptly when `cancel` fires or the
    /// stream's receiver is dropped, closing the channel without a terminal
    /// event in either case.
    async fn generate_response(
        &self,
        message: ChatMessage,
        options: GenerationOptions,
        cancel: CancellationToken,
    ) -> Result<ResponseStream, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use localchat_domain::Completion;

    #[tokio::test]
    async fn collect_text_concatenates_deltas() {
        let (tx, rx) = mpsc::channel(8);
        tx.send(ResponseEvent::TextDelta("foo".to_string()))
            .await
            .unwrap();
        tx.send(ResponseEvent::TextDelta("bar".to_string()))
            .await
            .unwrap();
        tx.send(ResponseEvent::Complete(Completion {
            message: ChatMessage::assistant("foobar"),
            usage: None,
        }))
        .await
        .unwrap();
        drop(tx);

        let text = ResponseStream::new(rx).collect_text().await.unwrap();
        assert_eq!(text, "foobar");
    }

    #[tokio::test]
    async fn collect_text_falls_back_to_completion_message() {
        let (tx, rx) = mpsc::channel(8);
        tx.send(ResponseEvent::Complete(Completion {
            message: ChatMessage::assistant("whole reply"),
            usage: None,
        }))
        .await
        .unwrap();
        drop(tx);

        let text = ResponseStream::new(rx).collect_text().await.unwrap();
        assert_eq!(text, "whole reply");
    }

    #[tokio::test]
    async fn collect_text_surfaces_stream_errors() {
        let (tx, rx) = mpsc::channel(8);
        tx.send(ResponseEvent::Error("backend gone".to_string()))
            .await
            .unwrap();
        drop(tx);

        let err = ResponseStream::new(rx).collect_text().await.unwrap_err();
        assert!(matches!(err, ProviderError::GenerationFailed(_)));
    }
}
