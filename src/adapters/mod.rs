//! Adapters - concrete implementations of the ports.
//!
//! - `ai` - summarizers (OpenAI, mock)
//! - `settings` - settings providers (Postgres, static)
//! - `storage` - interview stores (JSON files, Postgres)
//! - `transport` - prompt sinks (tokio channels)

pub mod ai;
pub mod settings;
pub mod storage;
pub mod transport;
