//! Prompt sink port - where the controller's prompts get spoken.
//!
//! The dialog core produces prompt strings; a sink hands them to whatever
//! transport fronts the interview (a voice pipeline, a websocket, a test
//! buffer).

use async_trait::async_trait;

/// Errors from prompt delivery.
#[derive(Debug, thiserror::Error)]
pub enum PromptSinkError {
    /// The receiving side is gone.
    #[error("prompt channel closed")]
    Closed,

    /// Transport-specific delivery failure.
    #[error("delivery failed: {0}")]
    Delivery(String),
}

/// Port for delivering prompts to the candidate, in order.
#[async_trait]
pub trait PromptSink: Send + Sync {
    /// Delivers one prompt. Prompts from one turn are delivered in the
    /// order the controller emitted them.
    async fn deliver(&self, prompt: &str) -> Result<(), PromptSinkError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_sink_is_object_safe() {
        fn _accepts_dyn(_s: &dyn PromptSink) {}
    }
}
