//! Postgres interview store.
//!
//! Inserts one row per finished session into `interview_sessions`. The
//! collected answers and the question-count metadata are stored as JSONB
//! so the schema survives script changes.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;

use crate::domain::foundation::{InterviewId, SettingsId};
use crate::domain::interview::SessionRecord;
use crate::ports::{InterviewStore, StoreError};

/// Postgres implementation of the [`InterviewStore`] port.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
    settings_id: SettingsId,
}

impl PostgresStore {
    /// Creates a store writing against the given pool, tagging each row
    /// with the settings the interview ran under.
    pub fn new(pool: PgPool, settings_id: SettingsId) -> Self {
        Self { pool, settings_id }
    }
}

#[async_trait]
impl InterviewStore for PostgresStore {
    async fn store(
        &self,
        session_id: InterviewId,
        record: &SessionRecord,
    ) -> Result<(), StoreError> {
        let transcript = serde_json::to_value(&record.candidate)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        let metadata = serde_json::to_value(&record.metadata)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO interview_sessions
                (session_id, settings_id, candidate_name, transcript, evaluation, metadata, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(session_id.as_uuid())
        .bind(self.settings_id.as_i32())
        .bind(record.candidate.display_name())
        .bind(transcript)
        .bind(record.summary.as_deref())
        .bind(metadata)
        .bind(record.timestamp.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        info!(session_id = %session_id, "interview record inserted");
        Ok(())
    }
}
