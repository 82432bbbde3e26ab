//! Channel-backed prompt sink.
//!
//! Forwards prompts onto a tokio mpsc channel. The receiving half is owned
//! by whatever fronts the interview: a TTS pipeline in production, a plain
//! collector in tests.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::ports::{PromptSink, PromptSinkError};

/// mpsc implementation of the [`PromptSink`] port.
#[derive(Debug, Clone)]
pub struct ChannelPromptSink {
    sender: mpsc::Sender<String>,
}

impl ChannelPromptSink {
    /// Wraps an existing sender.
    pub fn new(sender: mpsc::Sender<String>) -> Self {
        Self { sender }
    }

    /// Creates a sink together with its receiving half.
    pub fn pair(buffer: usize) -> (Self, mpsc::Receiver<String>) {
        let (sender, receiver) = mpsc::channel(buffer);
        (Self::new(sender), receiver)
    }
}

#[async_trait]
impl PromptSink for ChannelPromptSink {
    async fn deliver(&self, prompt: &str) -> Result<(), PromptSinkError> {
        self.sender
            .send(prompt.to_string())
            .await
            .map_err(|_| PromptSinkError::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn delivers_prompts_in_order() {
        let (sink, mut receiver) = ChannelPromptSink::pair(8);
        sink.deliver("first").await.unwrap();
        sink.deliver("second").await.unwrap();

        assert_eq!(receiver.recv().await.as_deref(), Some("first"));
        assert_eq!(receiver.recv().await.as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn closed_receiver_surfaces_as_error() {
        let (sink, receiver) = ChannelPromptSink::pair(1);
        drop(receiver);

        let err = sink.deliver("lost").await.unwrap_err();
        assert!(matches!(err, PromptSinkError::Closed));
    }
}
