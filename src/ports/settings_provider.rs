//! Settings provider port - per-deployment interview configuration.
//!
//! Settings describe one interview flavor: which company it is for, which
//! question phases run, and how strict answer screening is. Providers load
//! them from a database or hold a static copy; either way the application
//! layer converts them into a concrete [`InterviewScript`] before the
//! session starts.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::SettingsId;
use crate::domain::interview::InterviewScript;

/// Errors from settings lookup.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// No settings row exists for the requested id.
    #[error("settings not found: {0}")]
    NotFound(SettingsId),

    /// Database failure.
    #[error("database error: {0}")]
    Database(String),
}

/// How strict answer sufficiency screening is.
///
/// Maps to the minimum word count a substantive answer must reach.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    /// Accept almost anything beyond a bare yes/no.
    Lenient,
    #[default]
    Medium,
    /// Expect a real explanation.
    Strict,
}

impl Strictness {
    /// Minimum countable words for a sufficient answer.
    pub fn min_words(self) -> usize {
        match self {
            Strictness::Lenient => 3,
            Strictness::Medium => 5,
            Strictness::Strict => 8,
        }
    }
}

/// One interview deployment's configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewSettings {
    pub company_name: String,
    /// Field the interview screens for, e.g. `data_science`. Custom
    /// question lists are selected by this value.
    pub interview_field: String,
    pub include_hr: bool,
    pub include_technical: bool,
    /// TTS voice identifier, passed through to the transport.
    pub voice: String,
    /// BCP 47 language tag of the interview.
    pub language: String,
    pub strictness: Strictness,
    pub skip_requires_insist: bool,
    /// Custom HR questions; empty means use the script defaults.
    pub hr_questions: Vec<String>,
    /// Custom technical questions; empty means use the script defaults.
    pub technical_questions: Vec<String>,
}

impl InterviewSettings {
    /// Builds the concrete script for these settings.
    ///
    /// Starts from the default script, swaps in custom question lists when
    /// present, and empties the lists of disabled phases. Disabling a phase
    /// wins over custom questions for it.
    pub fn into_script(self) -> InterviewScript {
        let mut script = InterviewScript::default();
        script.company_name = self.company_name;
        if !self.hr_questions.is_empty() {
            script.hr_questions = self.hr_questions;
        }
        if !self.technical_questions.is_empty() {
            script.tech_questions = self.technical_questions;
        }
        if !self.include_hr {
            script.hr_questions.clear();
        }
        if !self.include_technical {
            script.tech_questions.clear();
        }
        script.hr_min_words = self.strictness.min_words();
        script.tech_min_words = self.strictness.min_words();
        script.skip_requires_insist = self.skip_requires_insist;
        script
    }
}

impl Default for InterviewSettings {
    fn default() -> Self {
        Self {
            company_name: "OnTime".to_string(),
            interview_field: "data_science".to_string(),
            include_hr: true,
            include_technical: true,
            voice: "alloy".to_string(),
            language: "en".to_string(),
            strictness: Strictness::Medium,
            skip_requires_insist: true,
            hr_questions: Vec::new(),
            technical_questions: Vec::new(),
        }
    }
}

/// Port for loading interview settings.
#[async_trait]
pub trait SettingsProvider: Send + Sync {
    /// Loads the settings row with the given id.
    async fn load(&self, id: SettingsId) -> Result<InterviewSettings, SettingsError>;
}
