//! Application layer - wires the dialog core to the ports.
//!
//! - `InterviewRunner` - drives one session from greeting to stored record
//! - `resolve_script` - settings lookup with default fallback

mod bootstrap;
mod runner;

pub use bootstrap::resolve_script;
pub use runner::InterviewRunner;
