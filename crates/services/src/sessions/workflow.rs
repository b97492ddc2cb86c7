use tracing::{Instrument, info_span};

use quiz_core::model::OverallEvaluation;

use super::controller::QuizSession;
use crate::error::SessionError;
use crate::evaluation::EvaluationClient;

impl QuizSession {
    /// Submits the current draft and records the feedback.
    ///
    /// Safe to call again after a failure: nothing is recorded until the client succeeds.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` for illegal transitions, blank drafts or evaluation failures.
    pub async fn submit_answer(
        &mut self,
        client: &dyn EvaluationClient,
    ) -> Result<(), SessionError> {
        let pending = self.begin_submit()?;
        let span = info_span!(
            "evaluate_answer",
            session_id = %self.id(),
            scenario = %pending.scenario.id()
        );
        let outcome = client
            .evaluate_answer(&pending.scenario, &pending.answer)
            .instrument(span)
            .await;
        self.finish_submit(pending, outcome)
    }

    /// Requests the overall evaluation and completes the session on success.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` for illegal transitions or evaluation failures.
    pub async fn request_overall(
        &mut self,
        client: &dyn EvaluationClient,
    ) -> Result<&OverallEvaluation, SessionError> {
        let pending = self.begin_overall()?;
        let span = info_span!(
            "evaluate_overall",
            session_id = %self.id(),
            questions = pending.results.len()
        );
        let outcome = client
            .evaluate_overall(&pending.results)
            .instrument(span)
            .await;
        self.finish_overall(pending, outcome)?;
        self.overall().ok_or(SessionError::Incomplete)
    }
}
