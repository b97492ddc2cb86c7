use async_trait::async_trait;

use quiz_core::model::{OverallEvaluation, QuestionResult, Scenario};

use crate::error::EvaluationError;

/// Scores answers remotely. Implementations never retry; retry is a user action.
#[async_trait]
pub trait EvaluationClient: Send + Sync {
    /// Feedback text for one answer.
    ///
    /// # Errors
    ///
    /// Returns `EvaluationError::Network` on transport failure and
    /// `EvaluationError::Upstream` / `EvaluationError::MalformedBody` when the remote misbehaves.
    async fn evaluate_answer(
        &self,
        scenario: &Scenario,
        answer: &str,
    ) -> Result<String, EvaluationError>;

    /// Level and summary across all answered scenarios.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`EvaluationClient::evaluate_answer`].
    async fn evaluate_overall(
        &self,
        results: &[QuestionResult],
    ) -> Result<OverallEvaluation, EvaluationError>;
}
