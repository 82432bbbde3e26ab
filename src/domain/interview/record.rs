//! Collected answers and the persisted session record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

/// Everything collected from the candidate during one interview.
///
/// Intake answers are stored verbatim; list-driven answers keep the order
/// the questions were asked in. `skipped` holds question texts, not
/// answers. The two counters are monotonically non-decreasing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub name: Option<String>,
    pub personal: Option<String>,
    pub education: Option<String>,
    pub experience: Option<String>,
    pub hr_answers: Vec<String>,
    pub tech_answers: Vec<String>,
    pub skipped: Vec<String>,
    pub off_topic: u32,
    pub manipulation: u32,
}

impl CandidateRecord {
    /// Candidate name for file names and database rows, `unknown` when
    /// the interview never got that far.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("unknown")
    }
}

/// Question totals and answered counts, stored alongside the record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordMetadata {
    pub company_name: String,
    pub total_hr_questions: usize,
    pub hr_answered: usize,
    pub total_tech_questions: usize,
    pub tech_answered: usize,
    pub skipped: usize,
}

/// Final structured snapshot of a session, written at end of interview.
///
/// `summary` is `None` when summary generation failed or was skipped;
/// persistence of the collected answers never depends on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub timestamp: Timestamp,
    pub candidate: CandidateRecord,
    pub summary: Option<String>,
    pub metadata: RecordMetadata,
}
