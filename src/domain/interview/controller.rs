//! Dialog controller: one utterance in, prompts and a new session out.
//!
//! The controller is a pure function of the current session and one
//! utterance. It owns the script and the screening heuristics but holds no
//! per-session state; the session value is moved in and handed back, which
//! keeps concurrent sessions fully independent and the controller trivially
//! testable without a live transport.

use tracing::debug;

use crate::domain::foundation::Timestamp;

use super::record::{RecordMetadata, SessionRecord};
use super::screening::UtteranceScreen;
use super::script::{InterviewScript, MAX_INSISTS};
use super::session::InterviewSession;
use super::stage::Stage;

/// Result of feeding one utterance (or opening the session).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    /// The session after this turn.
    pub session: InterviewSession,
    /// Prompts to speak, in order. Empty for non-events.
    pub prompts: Vec<String>,
    /// True once the session has reached the terminal stage.
    pub terminal: bool,
}

impl TurnOutcome {
    fn new(session: InterviewSession, prompts: Vec<String>) -> Self {
        let terminal = session.is_completed();
        Self {
            session,
            prompts,
            terminal,
        }
    }
}

/// Drives the scripted interview flow.
pub struct DialogController {
    script: InterviewScript,
    screen: UtteranceScreen,
}

impl DialogController {
    /// Creates a controller for the given script and screening lists.
    pub fn new(script: InterviewScript, screen: UtteranceScreen) -> Self {
        Self { script, screen }
    }

    /// Creates a controller with the fixed default script and screen.
    pub fn with_defaults() -> Self {
        Self::new(InterviewScript::default(), UtteranceScreen::default())
    }

    pub fn script(&self) -> &InterviewScript {
        &self.script
    }

    /// Opens the session: speaks the greeting and asks for the name.
    ///
    /// No-op if the session has already left the greeting stage.
    pub fn open(&self, mut session: InterviewSession) -> TurnOutcome {
        if session.stage() != Stage::Greeting {
            return TurnOutcome::new(session, Vec::new());
        }
        session.advance_stage(Stage::AskName);
        TurnOutcome::new(
            session,
            vec![self.script.greeting.clone(), self.script.name_prompt.clone()],
        )
    }

    /// Processes one finalized utterance.
    pub fn advance(&self, mut session: InterviewSession, utterance: &str) -> TurnOutcome {
        let text = utterance.trim();

        // A silent or empty turn is a non-event.
        if text.is_empty() {
            return TurnOutcome::new(session, Vec::new());
        }

        // Manipulation takes priority over everything, in every stage.
        if self.screen.is_manipulation(text) {
            debug!(stage = session.stage().label(), "manipulation attempt");
            session.note_manipulation();
            return TurnOutcome::new(session, vec![self.script.refusal.clone()]);
        }

        let stage = session.stage();

        if !stage.is_terminal() && !stage.off_topic_exempt() && self.screen.is_off_topic(text) {
            debug!(stage = stage.label(), "off-topic utterance");
            session.note_off_topic();
            let mut prompts = vec![self.script.redirect.clone()];
            if let Some(question) =
                self.script
                    .pending_question(stage, session.hr_cursor(), session.tech_cursor())
            {
                prompts.push(question.to_string());
            }
            return TurnOutcome::new(session, prompts);
        }

        match stage {
            Stage::Greeting | Stage::AskName => {
                session.record_intake(stage, text);
                if stage == Stage::Greeting {
                    session.advance_stage(Stage::AskName);
                }
                session.advance_stage(Stage::AskPersonal);
                TurnOutcome::new(session, vec![self.script.personal_prompt.clone()])
            }
            Stage::AskPersonal => {
                session.record_intake(stage, text);
                session.advance_stage(Stage::AskEducation);
                TurnOutcome::new(session, vec![self.script.education_prompt.clone()])
            }
            Stage::AskEducation => {
                session.record_intake(stage, text);
                session.advance_stage(Stage::AskExperience);
                TurnOutcome::new(session, vec![self.script.experience_prompt.clone()])
            }
            Stage::AskExperience => {
                session.record_intake(stage, text);
                let prompts = self.enter_question_phase(&mut session);
                TurnOutcome::new(session, prompts)
            }
            Stage::Hr => self.hr_turn(session, text),
            Stage::Tech => self.tech_turn(session, text),
            // Terminal stage ignores further utterances.
            Stage::Completed => TurnOutcome::new(session, Vec::new()),
        }
    }

    /// Assembles the persistence record for the session as it stands.
    ///
    /// The summary is filled in later by the application layer; it is not
    /// part of the controller's responsibility.
    pub fn record(&self, session: &InterviewSession) -> SessionRecord {
        let candidate = session.candidate().clone();
        SessionRecord {
            timestamp: Timestamp::now(),
            metadata: RecordMetadata {
                company_name: self.script.company_name.clone(),
                total_hr_questions: self.script.hr_questions.len(),
                hr_answered: candidate.hr_answers.len(),
                total_tech_questions: self.script.tech_questions.len(),
                tech_answered: candidate.tech_answers.len(),
                skipped: candidate.skipped.len(),
            },
            candidate,
            summary: None,
        }
    }

    /// Picks the first enabled question phase after the intake stages.
    fn enter_question_phase(&self, session: &mut InterviewSession) -> Vec<String> {
        if self.script.has_hr() {
            session.advance_stage(Stage::Hr);
            vec![
                self.script.hr_intro.clone(),
                self.script.hr_questions[0].clone(),
            ]
        } else if self.script.has_tech() {
            session.advance_stage(Stage::Tech);
            vec![
                self.script.tech_intro.clone(),
                self.script.tech_questions[0].clone(),
            ]
        } else {
            session.advance_stage(Stage::Completed);
            self.closing_prompts()
        }
    }

    fn hr_turn(&self, mut session: InterviewSession, text: &str) -> TurnOutcome {
        let Some(question) = self.script.hr_questions.get(session.hr_cursor()).cloned() else {
            let prompts = self.leave_hr(&mut session);
            return TurnOutcome::new(session, prompts);
        };

        let mut prompts = Vec::new();
        if self.screen.wants_to_skip(text) {
            // HR skips are honored immediately, no insisting.
            session.skip_question(Stage::Hr, &question);
            prompts.push(self.script.skip_ack.clone());
        } else if !self.screen.is_sufficient(text, self.script.min_words(Stage::Hr))
            && session.insist_count() < MAX_INSISTS
        {
            let strike = session.insist_count();
            session.note_insist();
            return TurnOutcome::new(session, vec![self.script.insist_prompt(strike).to_string()]);
        } else {
            session.accept_hr_answer(text);
            prompts.push(self.script.ack.clone());
        }

        if let Some(next) = self.script.hr_questions.get(session.hr_cursor()) {
            prompts.push(next.clone());
        } else {
            prompts.extend(self.leave_hr(&mut session));
        }
        TurnOutcome::new(session, prompts)
    }

    fn tech_turn(&self, mut session: InterviewSession, text: &str) -> TurnOutcome {
        let Some(question) = self.script.tech_questions.get(session.tech_cursor()).cloned() else {
            session.advance_stage(Stage::Completed);
            return TurnOutcome::new(session, self.closing_prompts());
        };

        let mut prompts = Vec::new();
        if self.screen.wants_to_skip(text) {
            if self.script.skip_requires_insist && session.insist_count() < MAX_INSISTS {
                let strike = session.insist_count();
                session.note_insist();
                return TurnOutcome::new(
                    session,
                    vec![self.script.insist_prompt(strike).to_string()],
                );
            }
            session.skip_question(Stage::Tech, &question);
            prompts.push(self.script.skip_ack.clone());
        } else if !self.screen.is_sufficient(text, self.script.min_words(Stage::Tech)) {
            if session.insist_count() < MAX_INSISTS {
                let strike = session.insist_count();
                session.note_insist();
                return TurnOutcome::new(
                    session,
                    vec![self.script.insist_prompt(strike).to_string()],
                );
            }
            // Two insists spent: accept the short answer as given.
            session.accept_tech_answer(text);
            prompts.push(self.script.tech_ack.clone());
        } else {
            session.accept_tech_answer(text);
            prompts.push(self.script.tech_ack.clone());
        }

        if let Some(next) = self.script.tech_questions.get(session.tech_cursor()) {
            prompts.push(next.clone());
        } else {
            session.advance_stage(Stage::Completed);
            prompts.extend(self.closing_prompts());
        }
        TurnOutcome::new(session, prompts)
    }

    fn leave_hr(&self, session: &mut InterviewSession) -> Vec<String> {
        if self.script.has_tech() {
            session.advance_stage(Stage::Tech);
            vec![
                self.script.tech_intro.clone(),
                self.script.tech_questions[0].clone(),
            ]
        } else {
            session.advance_stage(Stage::Completed);
            self.closing_prompts()
        }
    }

    fn closing_prompts(&self) -> Vec<String> {
        vec![self.script.closing.clone(), self.script.farewell.clone()]
    }
}

impl Default for DialogController {
    fn default() -> Self {
        Self::with_defaults()
    }
}
