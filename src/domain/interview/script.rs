//! Interview script: question lists, fixed prompts, and flow thresholds.
//!
//! The script is pure data. The [`DialogController`] reads it; nothing in
//! this crate hard-codes prompt text outside of the defaults below, so a
//! deployment can swap the whole script per company or language through
//! its settings source.
//!
//! [`DialogController`]: crate::domain::interview::DialogController

use serde::{Deserialize, Serialize};

use super::stage::Stage;

/// Number of elaboration requests before an answer or skip is force-accepted.
pub const MAX_INSISTS: u8 = 2;

/// Fixed prompts, question lists, and thresholds for one interview flavor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewScript {
    /// Company name, used in stored records and logs.
    pub company_name: String,
    /// Opening welcome line.
    pub greeting: String,
    /// Request for the candidate's full name.
    pub name_prompt: String,
    /// Request for age and place of residence.
    pub personal_prompt: String,
    /// Request for the education summary.
    pub education_prompt: String,
    /// Request for the work experience summary.
    pub experience_prompt: String,
    /// Introduction spoken when entering the HR phase.
    pub hr_intro: String,
    /// Introduction spoken when entering the technical phase.
    pub tech_intro: String,
    /// Ordered HR question list. Empty disables the HR phase.
    pub hr_questions: Vec<String>,
    /// Ordered technical question list. Empty disables the technical phase.
    pub tech_questions: Vec<String>,
    /// Acknowledgement after an accepted HR answer.
    pub ack: String,
    /// Acknowledgement after an accepted technical answer.
    pub tech_ack: String,
    /// Acknowledgement after a skipped question.
    pub skip_ack: String,
    /// Escalating elaboration requests, indexed by insist strike.
    pub insist_prompts: [String; 2],
    /// Fixed refusal spoken on a manipulation attempt.
    pub refusal: String,
    /// Fixed redirect spoken on an off-topic utterance.
    pub redirect: String,
    /// Spoken once when the last question list is exhausted.
    pub closing: String,
    /// Final line asking the candidate to end the call.
    pub farewell: String,
    /// Minimum word count for a sufficient HR answer.
    pub hr_min_words: usize,
    /// Minimum word count for a sufficient technical answer.
    pub tech_min_words: usize,
    /// Whether a skip request in the technical phase goes through the
    /// insist policy (true) or skips outright (false).
    pub skip_requires_insist: bool,
}

impl InterviewScript {
    /// Returns true if the HR phase is enabled.
    pub fn has_hr(&self) -> bool {
        !self.hr_questions.is_empty()
    }

    /// Returns true if the technical phase is enabled.
    pub fn has_tech(&self) -> bool {
        !self.tech_questions.is_empty()
    }

    /// Returns the elaboration prompt for the given insist strike.
    ///
    /// Strike counts beyond the configured prompts clamp to the last one.
    pub fn insist_prompt(&self, strike: u8) -> &str {
        let idx = (strike as usize).min(self.insist_prompts.len() - 1);
        &self.insist_prompts[idx]
    }

    /// Returns the minimum word count for the given list-driven stage.
    pub fn min_words(&self, stage: Stage) -> usize {
        match stage {
            Stage::Tech => self.tech_min_words,
            _ => self.hr_min_words,
        }
    }

    /// Returns the question the candidate is currently expected to answer.
    ///
    /// Used to re-ask after an off-topic redirect. `None` for terminal and
    /// pre-greeting stages and for cursors past the end of a list.
    pub fn pending_question(&self, stage: Stage, hr_cursor: usize, tech_cursor: usize) -> Option<&str> {
        match stage {
            Stage::Greeting => None,
            Stage::AskName => Some(&self.name_prompt),
            Stage::AskPersonal => Some(&self.personal_prompt),
            Stage::AskEducation => Some(&self.education_prompt),
            Stage::AskExperience => Some(&self.experience_prompt),
            Stage::Hr => self.hr_questions.get(hr_cursor).map(String::as_str),
            Stage::Tech => self.tech_questions.get(tech_cursor).map(String::as_str),
            Stage::Completed => None,
        }
    }

    /// Replaces the HR question list.
    pub fn with_hr_questions(mut self, questions: Vec<String>) -> Self {
        self.hr_questions = questions;
        self
    }

    /// Replaces the technical question list.
    pub fn with_tech_questions(mut self, questions: Vec<String>) -> Self {
        self.tech_questions = questions;
        self
    }

    /// Sets whether technical skips go through the insist policy.
    pub fn with_skip_requires_insist(mut self, value: bool) -> Self {
        self.skip_requires_insist = value;
        self
    }
}

impl Default for InterviewScript {
    /// The fixed default script used when no settings source is available.
    fn default() -> Self {
        Self {
            company_name: "OnTime".to_string(),
            greeting: "Hello, and welcome to the OnTime job interview.".to_string(),
            name_prompt: "To begin, please state your full name.".to_string(),
            personal_prompt: "Thank you. Now please tell me your age and where you live."
                .to_string(),
            education_prompt: "Great. Please describe your education.".to_string(),
            experience_prompt:
                "Very good. Now please describe your work experience in data science.".to_string(),
            hr_intro: "Excellent. I will now ask a few HR questions.".to_string(),
            tech_intro: "Alright, let's move on to the technical section.".to_string(),
            hr_questions: vec![
                "Why are you interested in working at OnTime?".to_string(),
                "What matters most to you in a work environment?".to_string(),
                "Where do you see yourself in five years?".to_string(),
            ],
            tech_questions: vec![
                "What is the difference between RNN and LSTM networks, and why do LSTMs perform better?"
                    .to_string(),
                "Why are convolutional networks well suited to image processing?".to_string(),
                "Why is data normalization important, and which methods do you know?".to_string(),
                "What is overfitting and how do we prevent it?".to_string(),
            ],
            ack: "Thank you.".to_string(),
            tech_ack: "Thank you for the explanation.".to_string(),
            skip_ack: "Alright, moving on to the next question.".to_string(),
            insist_prompts: [
                "Thank you, but could you explain in a little more detail?".to_string(),
                "If possible, please elaborate a little, or say 'skip' to move on.".to_string(),
            ],
            refusal:
                "I only act as the official OnTime interviewer and do not accept role changes. Let's continue."
                    .to_string(),
            redirect:
                "Thank you, but we are currently in an interview session. Please focus on the interview questions."
                    .to_string(),
            closing: "That concludes the interview. Thank you for your time and cooperation."
                .to_string(),
            farewell: "You may now end the call.".to_string(),
            hr_min_words: 5,
            tech_min_words: 5,
            skip_requires_insist: true,
        }
    }
}
