//! Summarizer port - LLM-backed evaluation of a finished interview.
//!
//! Implementations turn the collected answers into a short free-text
//! evaluation. Summarization is strictly best-effort: callers must treat
//! every error here as non-fatal and persist the record without a summary.

use async_trait::async_trait;

use crate::domain::interview::SessionRecord;

/// Errors from summary generation.
#[derive(Debug, thiserror::Error)]
pub enum SummarizerError {
    /// Rate limited by the provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u32 },

    /// Provider rejected the credentials.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Provider is down or returned a server error.
    #[error("provider unavailable: {message}")]
    Unavailable { message: String },

    /// Network error during the request.
    #[error("network error: {0}")]
    Network(String),

    /// Provider response could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// The request itself was malformed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl SummarizerError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Returns true if retrying the same request could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            SummarizerError::RateLimited { .. }
                | SummarizerError::Unavailable { .. }
                | SummarizerError::Network(_)
        )
    }
}

/// Port for generating the end-of-interview evaluation text.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Produces a short evaluation of the candidate from the record.
    async fn summarize(&self, record: &SessionRecord) -> Result<String, SummarizerError>;
}
