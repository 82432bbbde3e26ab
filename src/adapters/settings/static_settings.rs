//! Static settings provider.
//!
//! Holds one fixed settings value. Used in tests and in deployments that
//! run a single interview flavor without a database.

use async_trait::async_trait;

use crate::domain::foundation::SettingsId;
use crate::ports::{InterviewSettings, SettingsError, SettingsProvider};

/// In-memory implementation of the [`SettingsProvider`] port.
#[derive(Debug, Clone, Default)]
pub struct StaticSettings {
    settings: InterviewSettings,
}

impl StaticSettings {
    pub fn new(settings: InterviewSettings) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl SettingsProvider for StaticSettings {
    async fn load(&self, _id: SettingsId) -> Result<InterviewSettings, SettingsError> {
        Ok(self.settings.clone())
    }
}
