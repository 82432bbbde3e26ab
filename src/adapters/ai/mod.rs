//! AI adapters implementing the [`Summarizer`] port.
//!
//! - `OpenAISummarizer` - chat completions against the OpenAI API
//! - `MockSummarizer` - canned responses for tests
//!
//! [`Summarizer`]: crate::ports::Summarizer

mod mock_summarizer;
mod openai_summarizer;

pub use mock_summarizer::{MockSummarizer, MockSummary};
pub use openai_summarizer::{OpenAIConfig, OpenAISummarizer};
