use chrono::{DateTime, Utc};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, info, warn};

use quiz_core::model::{
    OverallEvaluation, QuestionResult, Scenario, SessionId, SessionSummary,
};
use quiz_core::{Catalog, QUESTIONS_PER_SESSION};

use super::phase::{Phase, QuestionStep};
use super::progress::SessionProgress;
use crate::Clock;
use crate::error::{EvaluationError, SessionError};

//
// ─── PENDING REQUESTS ──────────────────────────────────────────────────────────
//

/// Everything needed to evaluate the current answer without borrowing the session.
///
/// Returned by [`QuizSession::begin_submit`] and handed back to
/// [`QuizSession::finish_submit`] with the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAnswer {
    session_id: SessionId,
    index: usize,
    pub scenario: Scenario,
    pub answer: String,
}

/// Inputs for the overall evaluation, detached from the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingOverall {
    session_id: SessionId,
    pub results: Vec<QuestionResult>,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One assessment run: five sampled scenarios answered in order, then rated overall.
///
/// Answers and feedback only ever grow together, so `answers().len() == feedback().len()`
/// holds after every transition. Nothing is recorded until an evaluation succeeds, which
/// makes every failed request safe to retry with the same inputs.
#[derive(Debug, Clone)]
pub struct QuizSession {
    id: SessionId,
    clock: Clock,
    scenarios: Vec<Scenario>,
    answers: Vec<String>,
    feedback: Vec<String>,
    draft: String,
    phase: Phase,
    last_error: Option<String>,
    overall: Option<OverallEvaluation>,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new(Clock::default())
    }
}

impl QuizSession {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            id: SessionId::generate(),
            clock,
            scenarios: Vec::new(),
            answers: Vec::new(),
            feedback: Vec::new(),
            draft: String::new(),
            phase: Phase::NotStarted,
            last_error: None,
            overall: None,
            started_at: None,
            completed_at: None,
        }
    }

    // ─── lifecycle ───

    /// Samples a fresh set of scenarios and moves to the first question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotEnoughScenarios` if the catalog is too small.
    pub fn start(&mut self, catalog: &Catalog) -> Result<(), SessionError> {
        self.start_with_rng(catalog, &mut rand::rng())
    }

    /// Like [`QuizSession::start`] with a caller-supplied random source.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotEnoughScenarios` if the catalog is too small.
    pub fn start_with_rng<R: Rng + ?Sized>(
        &mut self,
        catalog: &Catalog,
        rng: &mut R,
    ) -> Result<(), SessionError> {
        if catalog.len() < QUESTIONS_PER_SESSION {
            return Err(SessionError::NotEnoughScenarios {
                available: catalog.len(),
                required: QUESTIONS_PER_SESSION,
            });
        }

        let mut pool = catalog.scenarios().to_vec();
        let (picked, _) = pool.partial_shuffle(rng, QUESTIONS_PER_SESSION);
        let scenarios = picked.to_vec();

        *self = Self::new(self.clock);
        self.scenarios = scenarios;
        self.started_at = Some(self.clock.now());
        self.phase = Phase::InProgress {
            index: 0,
            step: QuestionStep::Unanswered,
        };

        info!(
            session_id = %self.id.value(),
            scenarios = ?self.scenarios.iter().map(|s| s.id().as_str()).collect::<Vec<_>>(),
            "session started"
        );
        Ok(())
    }

    /// Clears everything and returns to `NotStarted`.
    pub fn reset(&mut self) {
        debug!(session_id = %self.id.value(), "session reset");
        *self = Self::new(self.clock);
    }

    // ─── answering ───

    /// Replaces the draft answer. Ignored unless the current question is editable.
    pub fn set_draft(&mut self, text: impl Into<String>) -> bool {
        if !self.is_editable() {
            return false;
        }
        self.draft = text.into();
        true
    }

    /// Moves the current question to `Submitting` and hands out its inputs.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Evaluation(EvaluationError::Validation)` for a blank draft,
    /// `SessionError::InFlight` while a submission is running and
    /// `SessionError::NotAnswering` when no question is open for answers.
    pub fn begin_submit(&mut self) -> Result<PendingAnswer, SessionError> {
        let Phase::InProgress { index, step } = self.phase else {
            return Err(SessionError::NotAnswering);
        };
        match step {
            QuestionStep::Unanswered | QuestionStep::Failed => {}
            QuestionStep::Submitting => return Err(SessionError::InFlight),
            QuestionStep::Answered => return Err(SessionError::NotAnswering),
        }
        if self.draft.trim().is_empty() {
            return Err(EvaluationError::Validation.into());
        }
        let scenario = self
            .scenarios
            .get(index)
            .cloned()
            .ok_or(SessionError::NotAnswering)?;

        self.phase = Phase::InProgress {
            index,
            step: QuestionStep::Submitting,
        };
        self.last_error = None;

        Ok(PendingAnswer {
            session_id: self.id,
            index,
            scenario,
            answer: self.draft.clone(),
        })
    }

    /// Applies the outcome of an answer evaluation.
    ///
    /// On success the answer and feedback are appended together. On failure the question
    /// returns to an editable state with the draft preserved and `last_error` set.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Stale` if `pending` belongs to another session or question,
    /// or the evaluation error itself on failure.
    pub fn finish_submit(
        &mut self,
        pending: PendingAnswer,
        outcome: Result<String, EvaluationError>,
    ) -> Result<(), SessionError> {
        let expected = Phase::InProgress {
            index: pending.index,
            step: QuestionStep::Submitting,
        };
        if pending.session_id != self.id || self.phase != expected {
            return Err(SessionError::Stale);
        }

        match outcome {
            Ok(feedback) => {
                self.answers.push(pending.answer);
                self.feedback.push(feedback);
                self.phase = Phase::InProgress {
                    index: pending.index,
                    step: QuestionStep::Answered,
                };
                info!(session_id = %self.id.value(), question = pending.index + 1, "answer evaluated");
                Ok(())
            }
            Err(err) => {
                warn!(session_id = %self.id.value(), question = pending.index + 1, %err, "answer evaluation failed");
                self.phase = Phase::InProgress {
                    index: pending.index,
                    step: QuestionStep::Failed,
                };
                self.last_error = Some(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Advances past an answered question.
    ///
    /// After the last question the session waits for the overall evaluation.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotAnswered` unless the current question is answered.
    pub fn next(&mut self) -> Result<Phase, SessionError> {
        let Phase::InProgress {
            index,
            step: QuestionStep::Answered,
        } = self.phase
        else {
            return Err(SessionError::NotAnswered);
        };

        self.draft.clear();
        self.last_error = None;
        self.phase = if index + 1 < self.scenarios.len() {
            Phase::InProgress {
                index: index + 1,
                step: QuestionStep::Unanswered,
            }
        } else {
            Phase::AwaitingOverall { requesting: false }
        };
        Ok(self.phase)
    }

    // ─── overall ───

    /// Marks the overall request in flight and hands out its inputs.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InFlight` if already requesting and
    /// `SessionError::NotAwaitingOverall` in any other phase.
    pub fn begin_overall(&mut self) -> Result<PendingOverall, SessionError> {
        match self.phase {
            Phase::AwaitingOverall { requesting: false } => {}
            Phase::AwaitingOverall { requesting: true } => return Err(SessionError::InFlight),
            _ => return Err(SessionError::NotAwaitingOverall),
        }
        self.phase = Phase::AwaitingOverall { requesting: true };
        self.last_error = None;
        Ok(PendingOverall {
            session_id: self.id,
            results: self.results(),
        })
    }

    /// Applies the outcome of the overall evaluation.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Stale` for a foreign or outdated request, or the evaluation
    /// error itself on failure (the session stays in `AwaitingOverall`).
    pub fn finish_overall(
        &mut self,
        pending: PendingOverall,
        outcome: Result<OverallEvaluation, EvaluationError>,
    ) -> Result<(), SessionError> {
        if pending.session_id != self.id || self.phase != (Phase::AwaitingOverall { requesting: true })
        {
            return Err(SessionError::Stale);
        }

        match outcome {
            Ok(evaluation) => {
                info!(session_id = %self.id.value(), level = %evaluation.level, "session complete");
                self.overall = Some(evaluation);
                self.completed_at = Some(self.clock.now());
                self.phase = Phase::Complete;
                Ok(())
            }
            Err(err) => {
                warn!(session_id = %self.id.value(), %err, "overall evaluation failed");
                self.phase = Phase::AwaitingOverall { requesting: false };
                self.last_error = Some(err.to_string());
                Err(err.into())
            }
        }
    }

    // ─── queries ───

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    #[must_use]
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    #[must_use]
    pub fn feedback(&self) -> &[String] {
        &self.feedback
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }

    #[must_use]
    pub fn overall(&self) -> Option<&OverallEvaluation> {
        self.overall.as_ref()
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.phase != Phase::NotStarted
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.phase.is_in_flight()
    }

    /// True when the draft may still be edited.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        matches!(
            self.phase.step(),
            Some(QuestionStep::Unanswered | QuestionStep::Failed)
        )
    }

    /// True when a submit would be accepted right now.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.is_editable() && !self.draft.trim().is_empty()
    }

    /// Index of the question on screen. Stays on the last question once all are answered.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        match self.phase {
            Phase::NotStarted => None,
            Phase::InProgress { index, .. } => Some(index),
            Phase::AwaitingOverall { .. } | Phase::Complete => self.scenarios.len().checked_sub(1),
        }
    }

    #[must_use]
    pub fn current_scenario(&self) -> Option<&Scenario> {
        self.phase
            .question_index()
            .and_then(|index| self.scenarios.get(index))
    }

    /// Feedback already received for the question at `index`.
    #[must_use]
    pub fn feedback_for(&self, index: usize) -> Option<&str> {
        self.feedback.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn answer_for(&self, index: usize) -> Option<&str> {
        self.answers.get(index).map(String::as_str)
    }

    /// Every answered scenario with its answer and feedback, in order.
    #[must_use]
    pub fn results(&self) -> Vec<QuestionResult> {
        self.scenarios
            .iter()
            .zip(self.answers.iter().zip(&self.feedback))
            .map(|(scenario, (answer, feedback))| QuestionResult {
                scenario: scenario.clone(),
                answer: answer.clone(),
                feedback: feedback.clone(),
            })
            .collect()
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let total = self.scenarios.len();
        let answered = self.answers.len();
        SessionProgress {
            total,
            answered,
            remaining: total.saturating_sub(answered),
            current_number: self.phase.question_index().map(|index| index + 1),
            is_complete: self.is_complete(),
        }
    }

    /// Summary of a completed run.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Incomplete` before completion, or a summary validation error.
    pub fn summary(&self) -> Result<SessionSummary, SessionError> {
        let (Some(started_at), Some(completed_at), Some(overall)) =
            (self.started_at, self.completed_at, self.overall.as_ref())
        else {
            return Err(SessionError::Incomplete);
        };
        let questions = u32::try_from(self.answers.len()).unwrap_or(u32::MAX);
        Ok(SessionSummary::new(
            self.id,
            started_at,
            completed_at,
            questions,
            overall,
        )?)
    }
}
