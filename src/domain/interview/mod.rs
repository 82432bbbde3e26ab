//! Interview domain: stages, script, screening, session state, and the
//! dialog controller that ties them together.

mod controller;
mod record;
mod screening;
mod script;
mod session;
mod stage;

pub use controller::{DialogController, TurnOutcome};
pub use record::{CandidateRecord, RecordMetadata, SessionRecord};
pub use screening::UtteranceScreen;
pub use script::{InterviewScript, MAX_INSISTS};
pub use session::InterviewSession;
pub use stage::Stage;
