//! Interview session state.
//!
//! One value per active interview. The session is mutated exclusively by
//! the [`DialogController`] in response to utterances; it is moved into
//! `advance` and handed back in the outcome, so there is no hidden state
//! shared between sessions or turns.
//!
//! [`DialogController`]: crate::domain::interview::DialogController

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{InterviewId, StateMachine, Timestamp};

use super::record::CandidateRecord;
use super::stage::Stage;

/// State of one interview: stage, collected answers, cursors, counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewSession {
    id: InterviewId,
    stage: Stage,
    candidate: CandidateRecord,
    hr_cursor: usize,
    tech_cursor: usize,
    insist_count: u8,
    started_at: Timestamp,
    updated_at: Timestamp,
}

impl InterviewSession {
    /// Creates a fresh session at the greeting stage.
    pub fn new() -> Self {
        let now = Timestamp::now();
        Self {
            id: InterviewId::new(),
            stage: Stage::Greeting,
            candidate: CandidateRecord::default(),
            hr_cursor: 0,
            tech_cursor: 0,
            insist_count: 0,
            started_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> InterviewId {
        self.id
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn candidate(&self) -> &CandidateRecord {
        &self.candidate
    }

    pub fn hr_cursor(&self) -> usize {
        self.hr_cursor
    }

    pub fn tech_cursor(&self) -> usize {
        self.tech_cursor
    }

    pub fn insist_count(&self) -> u8 {
        self.insist_count
    }

    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Returns true once the terminal stage is reached.
    pub fn is_completed(&self) -> bool {
        self.stage.is_terminal()
    }

    /// Moves to the target stage if the transition is valid.
    ///
    /// Invalid targets are ignored; the stage sequence is forward-only by
    /// construction and the controller never requests a regression.
    pub fn advance_stage(&mut self, target: Stage) {
        if self.stage.can_transition_to(&target) {
            self.stage = target;
            self.insist_count = 0;
            self.touch();
        }
    }

    /// Stores an intake answer under the field owned by the given stage.
    ///
    /// List-driven and terminal stages have no intake field; those calls
    /// are no-ops.
    pub fn record_intake(&mut self, stage: Stage, text: &str) {
        let slot = match stage {
            Stage::Greeting | Stage::AskName => &mut self.candidate.name,
            Stage::AskPersonal => &mut self.candidate.personal,
            Stage::AskEducation => &mut self.candidate.education,
            Stage::AskExperience => &mut self.candidate.experience,
            _ => return,
        };
        *slot = Some(text.to_string());
        self.touch();
    }

    /// Appends an accepted HR answer and moves the HR cursor forward.
    pub fn accept_hr_answer(&mut self, text: &str) {
        self.candidate.hr_answers.push(text.to_string());
        self.hr_cursor += 1;
        self.insist_count = 0;
        self.touch();
    }

    /// Appends an accepted technical answer and moves the tech cursor forward.
    pub fn accept_tech_answer(&mut self, text: &str) {
        self.candidate.tech_answers.push(text.to_string());
        self.tech_cursor += 1;
        self.insist_count = 0;
        self.touch();
    }

    /// Records the current question as skipped and moves the cursor of the
    /// given stage forward.
    pub fn skip_question(&mut self, stage: Stage, question: &str) {
        self.candidate.skipped.push(question.to_string());
        match stage {
            Stage::Hr => self.hr_cursor += 1,
            Stage::Tech => self.tech_cursor += 1,
            _ => {}
        }
        self.insist_count = 0;
        self.touch();
    }

    /// Records one more elaboration request for the current question.
    pub fn note_insist(&mut self) {
        self.insist_count = self.insist_count.saturating_add(1);
        self.touch();
    }

    /// Counts an off-topic detection.
    pub fn note_off_topic(&mut self) {
        self.candidate.off_topic += 1;
        self.touch();
    }

    /// Counts a manipulation attempt.
    pub fn note_manipulation(&mut self) {
        self.candidate.manipulation += 1;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}

impl Default for InterviewSession {
    fn default() -> Self {
        Self::new()
    }
}
