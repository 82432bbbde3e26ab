//! Session bootstrap helpers.

use tracing::warn;

use crate::domain::foundation::SettingsId;
use crate::domain::interview::InterviewScript;
use crate::ports::{InterviewSettings, SettingsProvider};

/// Loads the script for a session, falling back to the built-in defaults
/// when the settings source fails. An interview must start even when the
/// settings database is down.
pub async fn resolve_script(provider: &dyn SettingsProvider, id: SettingsId) -> InterviewScript {
    match provider.load(id).await {
        Ok(settings) => settings.into_script(),
        Err(err) => {
            warn!(settings_id = %id, error = %err, "settings lookup failed, using defaults");
            InterviewSettings::default().into_script()
        }
    }
}
