//! Transport adapters implementing the [`PromptSink`] port.
//!
//! [`PromptSink`]: crate::ports::PromptSink

mod channel_prompt_sink;

pub use channel_prompt_sink::ChannelPromptSink;
