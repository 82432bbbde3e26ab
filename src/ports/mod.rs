//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `Summarizer` - LLM-backed evaluation text for a finished interview
//! - `InterviewStore` - Durable storage for session records
//! - `SettingsProvider` - Per-deployment interview configuration
//! - `PromptSink` - Outbound channel the controller's prompts are spoken on

mod interview_store;
mod prompt_sink;
mod settings_provider;
mod summarizer;

pub use interview_store::{InterviewStore, StoreError};
pub use prompt_sink::{PromptSink, PromptSinkError};
pub use settings_provider::{InterviewSettings, SettingsError, SettingsProvider, Strictness};
pub use summarizer::{Summarizer, SummarizerError};
