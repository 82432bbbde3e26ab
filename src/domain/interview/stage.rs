//! Interview stage state machine.
//!
//! Stages form a fixed forward-only sequence from greeting to completion.
//! A stage may repeat (insists, redirects) but never regresses. The two
//! list-driven stages, `Hr` and `Tech`, loop over their question lists via
//! cursors held on the session rather than as separate stages.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// A named point in the fixed interview sequence.
///
/// ```text
/// Greeting -> AskName -> AskPersonal -> AskEducation -> AskExperience
///    -> Hr (question loop) -> Tech (question loop) -> Completed
/// ```
///
/// The `AskExperience -> Tech`, `AskExperience -> Completed` and
/// `Hr -> Completed` edges exist for deployments that disable the HR or
/// technical phase in their settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Session created, greeting not yet delivered.
    #[default]
    Greeting,

    /// Waiting for the candidate's full name.
    AskName,

    /// Waiting for age and place of residence.
    AskPersonal,

    /// Waiting for the education summary.
    AskEducation,

    /// Waiting for the work experience summary.
    AskExperience,

    /// Looping over the HR question list.
    Hr,

    /// Looping over the technical question list.
    Tech,

    /// Interview finished, session is read-only.
    Completed,
}

impl Stage {
    /// Returns true if the interview is over.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Returns true if the off-topic check is suppressed in this stage.
    ///
    /// Short factual answers (a name, an age) trip the question-mark
    /// heuristics too easily, so the simple intake stages are exempt.
    pub fn off_topic_exempt(&self) -> bool {
        matches!(self, Self::Greeting | Self::AskName | Self::AskPersonal)
    }

    /// Returns true if this stage consumes answers from a question list.
    pub fn is_list_driven(&self) -> bool {
        matches!(self, Self::Hr | Self::Tech)
    }

    /// Returns a short label for logs and stored metadata.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::AskName => "ask_name",
            Self::AskPersonal => "ask_personal",
            Self::AskEducation => "ask_education",
            Self::AskExperience => "ask_experience",
            Self::Hr => "hr",
            Self::Tech => "tech",
            Self::Completed => "completed",
        }
    }
}

impl StateMachine for Stage {
    fn can_transition_to(&self, target: &Self) -> bool {
        use Stage::*;
        matches!(
            (self, target),
            // Linear intake flow
            (Greeting, AskName)
                | (AskName, AskPersonal)
                | (AskPersonal, AskEducation)
                | (AskEducation, AskExperience)
                | (AskExperience, Hr)
                // HR disabled
                | (AskExperience, Tech)
                // Both phases disabled
                | (AskExperience, Completed)
                | (Hr, Tech)
                // Technical phase disabled
                | (Hr, Completed)
                | (Tech, Completed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use Stage::*;
        match self {
            Greeting => vec![AskName],
            AskName => vec![AskPersonal],
            AskPersonal => vec![AskEducation],
            AskEducation => vec![AskExperience],
            AskExperience => vec![Hr, Tech, Completed],
            Hr => vec![Tech, Completed],
            Tech => vec![Completed],
            Completed => vec![],
        }
    }
}
