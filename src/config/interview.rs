//! Interview runtime configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Which backend finished interviews are written to
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Files,
    Postgres,
}

/// Interview runtime configuration
#[derive(Debug, Clone, Deserialize)]
pub struct InterviewConfig {
    /// Settings row to load at session start
    #[serde(default = "default_settings_id")]
    pub settings_id: i32,

    /// Where finished interviews go
    #[serde(default)]
    pub store: StoreBackend,

    /// Directory for JSON records (files backend)
    #[serde(default = "default_records_dir")]
    pub records_dir: String,
}

impl InterviewConfig {
    /// Validate interview configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.store == StoreBackend::Files && self.records_dir.is_empty() {
            return Err(ValidationError::EmptyRecordsDir);
        }
        Ok(())
    }
}

impl Default for InterviewConfig {
    fn default() -> Self {
        Self {
            settings_id: default_settings_id(),
            store: StoreBackend::default(),
            records_dir: default_records_dir(),
        }
    }
}

fn default_settings_id() -> i32 {
    1
}

fn default_records_dir() -> String {
    "./interview_results".to_string()
}
