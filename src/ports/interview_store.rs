//! Interview store port - durable storage for finished session records.

use async_trait::async_trait;

use crate::domain::foundation::InterviewId;
use crate::domain::interview::SessionRecord;

/// Errors from record persistence.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Record could not be serialized.
    #[error("failed to serialize record: {0}")]
    Serialization(String),

    /// Filesystem failure.
    #[error("io error: {0}")]
    Io(String),

    /// Database failure.
    #[error("database error: {0}")]
    Database(String),
}

/// Port for persisting the final record of an interview.
///
/// Implementations must be append-only: a store call never mutates or
/// deletes previously written records.
#[async_trait]
pub trait InterviewStore: Send + Sync {
    /// Writes the record for the given session.
    async fn store(&self, session_id: InterviewId, record: &SessionRecord)
        -> Result<(), StoreError>;
}
