//! Storage adapters implementing the [`InterviewStore`] port.
//!
//! - `JsonFileStore` - one pretty-printed JSON file per session
//! - `PostgresStore` - one `interview_sessions` row per session
//!
//! [`InterviewStore`]: crate::ports::InterviewStore

mod json_file_store;
mod postgres_store;

pub use json_file_store::JsonFileStore;
pub use postgres_store::PostgresStore;
