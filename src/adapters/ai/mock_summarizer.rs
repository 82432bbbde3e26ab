//! Mock summarizer for testing.
//!
//! Configurable to return canned summaries or inject errors, and tracks
//! the records it was asked to summarize.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::interview::SessionRecord;
use crate::ports::{Summarizer, SummarizerError};

/// A configured mock result.
#[derive(Debug, Clone)]
pub enum MockSummary {
    Success(String),
    Unavailable(String),
    AuthenticationFailed,
}

/// Mock implementation of the [`Summarizer`] port.
#[derive(Debug, Clone, Default)]
pub struct MockSummarizer {
    /// Pre-configured results, consumed in order. Empty falls back to a
    /// fixed success.
    results: Arc<Mutex<VecDeque<MockSummary>>>,
    calls: Arc<Mutex<Vec<SessionRecord>>>,
}

impl MockSummarizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful summary.
    pub fn with_summary(self, text: impl Into<String>) -> Self {
        self.results
            .lock()
            .unwrap()
            .push_back(MockSummary::Success(text.into()));
        self
    }

    /// Queues an error result.
    pub fn with_error(self, error: MockSummary) -> Self {
        self.results.lock().unwrap().push_back(error);
        self
    }

    /// Records this mock was asked to summarize, in call order.
    pub fn calls(&self) -> Vec<SessionRecord> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Summarizer for MockSummarizer {
    async fn summarize(&self, record: &SessionRecord) -> Result<String, SummarizerError> {
        self.calls.lock().unwrap().push(record.clone());
        match self.results.lock().unwrap().pop_front() {
            Some(MockSummary::Success(text)) => Ok(text),
            Some(MockSummary::Unavailable(message)) => Err(SummarizerError::unavailable(message)),
            Some(MockSummary::AuthenticationFailed) => Err(SummarizerError::AuthenticationFailed),
            None => Ok("mock summary".to_string()),
        }
    }
}
