//! Interview runner - drives one session from greeting to stored record.
//!
//! The runner owns the loop around the [`DialogController`]: it consumes
//! finalized utterances from a channel, forwards the controller's prompts
//! to the sink, and on completion (or when the caller hangs up) assembles
//! and persists the session record. Summarization and storage failures are
//! logged and never lose the collected answers.
//!
//! [`DialogController`]: crate::domain::interview::DialogController

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{error, info, warn};

use crate::domain::interview::{DialogController, InterviewSession, SessionRecord};
use crate::ports::{InterviewStore, PromptSink, Summarizer};

/// Runs one interview session end to end.
pub struct InterviewRunner {
    controller: DialogController,
    sink: Arc<dyn PromptSink>,
    summarizer: Option<Arc<dyn Summarizer>>,
    store: Arc<dyn InterviewStore>,
}

impl InterviewRunner {
    pub fn new(
        controller: DialogController,
        sink: Arc<dyn PromptSink>,
        summarizer: Option<Arc<dyn Summarizer>>,
        store: Arc<dyn InterviewStore>,
    ) -> Self {
        Self {
            controller,
            sink,
            summarizer,
            store,
        }
    }

    /// Consumes utterances until the interview completes or the channel
    /// closes, then finalizes the session. The record is returned as well
    /// as persisted, so callers can inspect it.
    pub async fn run(&self, mut utterances: mpsc::Receiver<String>) -> SessionRecord {
        let mut outcome = self.controller.open(InterviewSession::new());
        let session_id = outcome.session.id();
        info!(session_id = %session_id, "interview session started");
        self.deliver_all(&outcome.prompts).await;

        let mut session = outcome.session;
        while !session.is_completed() {
            let Some(utterance) = utterances.recv().await else {
                info!(session_id = %session_id, "utterance channel closed, finalizing");
                break;
            };
            outcome = self.controller.advance(session, &utterance);
            self.deliver_all(&outcome.prompts).await;
            session = outcome.session;
        }

        self.finalize(&session).await
    }

    async fn deliver_all(&self, prompts: &[String]) {
        for prompt in prompts {
            if let Err(err) = self.sink.deliver(prompt).await {
                warn!(error = %err, "prompt delivery failed");
                return;
            }
        }
    }

    /// Assembles and persists the record. Best-effort throughout: a failed
    /// summary leaves `summary` empty, a failed store is logged.
    async fn finalize(&self, session: &InterviewSession) -> SessionRecord {
        let mut record = self.controller.record(session);

        if let Some(summarizer) = &self.summarizer {
            match summarizer.summarize(&record).await {
                Ok(summary) => record.summary = Some(summary),
                Err(err) => {
                    warn!(session_id = %session.id(), error = %err, "summary generation failed")
                }
            }
        }

        if let Err(err) = self.store.store(session.id(), &record).await {
            error!(session_id = %session.id(), error = %err, "failed to persist interview record");
        } else {
            info!(
                session_id = %session.id(),
                candidate = record.candidate.display_name(),
                "interview session finalized"
            );
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::adapters::ai::{MockSummarizer, MockSummary};
    use crate::adapters::transport::ChannelPromptSink;
    use crate::domain::foundation::InterviewId;
    use crate::ports::StoreError;

    /// In-memory store capturing every record it is handed.
    #[derive(Default)]
    struct VecStore {
        records: Mutex<Vec<(InterviewId, SessionRecord)>>,
        fail: bool,
    }

    impl VecStore {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        fn records(&self) -> Vec<(InterviewId, SessionRecord)> {
            self.records.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl InterviewStore for VecStore {
        async fn store(
            &self,
            session_id: InterviewId,
            record: &SessionRecord,
        ) -> Result<(), StoreError> {
            if self.fail {
                return Err(StoreError::Database("connection refused".to_string()));
            }
            self.records
                .lock()
                .unwrap()
                .push((session_id, record.clone()));
            Ok(())
        }
    }

    fn intake_answers() -> Vec<&'static str> {
        vec![
            "Ali Rezaei",
            "Tehran, 29",
            "BSc Computer Science",
            "2 years as data analyst",
        ]
    }

    async fn drive(
        runner: &InterviewRunner,
        utterances: Vec<String>,
        mut prompts: mpsc::Receiver<String>,
    ) -> SessionRecord {
        let (tx, rx) = mpsc::channel(64);
        let drain = tokio::spawn(async move { while prompts.recv().await.is_some() {} });
        for utterance in utterances {
            tx.send(utterance).await.unwrap();
        }
        drop(tx);
        let record = runner.run(rx).await;
        // The sink's sender lives inside the borrowed runner and is never
        // dropped here, so the drain loop can't end on its own.
        drain.abort();
        record
    }

    fn full_interview_utterances() -> Vec<String> {
        let mut utterances: Vec<String> =
            intake_answers().into_iter().map(str::to_string).collect();
        let long_answer =
            "I would approach this with careful data preparation and evaluation".to_string();
        for _ in 0..7 {
            utterances.push(long_answer.clone());
        }
        utterances
    }

    #[tokio::test]
    async fn completed_interview_is_summarized_and_stored() {
        let (sink, prompts) = ChannelPromptSink::pair(64);
        let store = Arc::new(VecStore::default());
        let summarizer = MockSummarizer::new().with_summary("strong candidate");
        let runner = InterviewRunner::new(
            DialogController::with_defaults(),
            Arc::new(sink),
            Some(Arc::new(summarizer)),
            store.clone(),
        );

        let record = drive(&runner, full_interview_utterances(), prompts).await;

        assert_eq!(record.summary.as_deref(), Some("strong candidate"));
        assert_eq!(record.candidate.name.as_deref(), Some("Ali Rezaei"));
        assert_eq!(record.metadata.hr_answered, 3);
        assert_eq!(record.metadata.tech_answered, 4);

        let stored = store.records();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].1, record);
    }

    #[tokio::test]
    async fn summarizer_failure_leaves_summary_empty() {
        let (sink, prompts) = ChannelPromptSink::pair(64);
        let store = Arc::new(VecStore::default());
        let summarizer =
            MockSummarizer::new().with_error(MockSummary::Unavailable("503".to_string()));
        let runner = InterviewRunner::new(
            DialogController::with_defaults(),
            Arc::new(sink),
            Some(Arc::new(summarizer)),
            store.clone(),
        );

        let record = drive(&runner, full_interview_utterances(), prompts).await;

        assert!(record.summary.is_none());
        // Answers are still persisted.
        assert_eq!(store.records().len(), 1);
        assert_eq!(store.records()[0].1.metadata.hr_answered, 3);
    }

    #[tokio::test]
    async fn store_failure_still_returns_the_record() {
        let (sink, prompts) = ChannelPromptSink::pair(64);
        let store = Arc::new(VecStore::failing());
        let runner = InterviewRunner::new(
            DialogController::with_defaults(),
            Arc::new(sink),
            None,
            store,
        );

        let record = drive(&runner, full_interview_utterances(), prompts).await;
        assert_eq!(record.candidate.name.as_deref(), Some("Ali Rezaei"));
        assert_eq!(record.metadata.tech_answered, 4);
    }

    #[tokio::test]
    async fn hang_up_mid_interview_persists_partial_answers() {
        let (sink, prompts) = ChannelPromptSink::pair(64);
        let store = Arc::new(VecStore::default());
        let runner = InterviewRunner::new(
            DialogController::with_defaults(),
            Arc::new(sink),
            None,
            store.clone(),
        );

        let utterances: Vec<String> = intake_answers()
            .into_iter()
            .take(2)
            .map(str::to_string)
            .collect();
        let record = drive(&runner, utterances, prompts).await;

        assert_eq!(record.candidate.name.as_deref(), Some("Ali Rezaei"));
        assert_eq!(record.candidate.personal.as_deref(), Some("Tehran, 29"));
        assert!(record.candidate.education.is_none());
        assert_eq!(record.metadata.hr_answered, 0);
        assert_eq!(store.records().len(), 1);
    }
}
