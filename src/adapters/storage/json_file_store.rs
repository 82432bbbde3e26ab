//! File-based interview store.
//!
//! Writes each finished session as one pretty-printed JSON file under a
//! base directory, named `interview_<candidate>_<timestamp>.json`. The
//! fallback store for deployments without a database.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

use crate::domain::foundation::InterviewId;
use crate::domain::interview::SessionRecord;
use crate::ports::{InterviewStore, StoreError};

/// JSON-file implementation of the [`InterviewStore`] port.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    base_path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store rooted at the given directory.
    ///
    /// The directory is created on first write if it does not exist.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn record_path(&self, record: &SessionRecord) -> PathBuf {
        let name = sanitize_name(record.candidate.display_name());
        self.base_path.join(format!(
            "interview_{}_{}.json",
            name,
            record.timestamp.file_stamp()
        ))
    }
}

/// Keeps candidate names filesystem-safe without dropping non-ASCII
/// letters.
fn sanitize_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.chars().all(|c| c == '_') {
        "unknown".to_string()
    } else {
        cleaned
    }
}

#[async_trait]
impl InterviewStore for JsonFileStore {
    async fn store(
        &self,
        session_id: InterviewId,
        record: &SessionRecord,
    ) -> Result<(), StoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))?;

        let json = serde_json::to_string_pretty(record)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        let path = self.record_path(record);
        fs::write(&path, json)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))?;

        info!(session_id = %session_id, path = %path.display(), "interview record written");
        Ok(())
    }
}
