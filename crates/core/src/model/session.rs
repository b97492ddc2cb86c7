use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use crate::model::{OverallEvaluation, SessionId, SkillLevel};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionSummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("a completed session needs at least one answered question")]
    NoQuestions,
}

/// Aggregate summary for a completed assessment run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    session_id: SessionId,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
    questions: u32,
    level: Option<SkillLevel>,
}

impl SessionSummary {
    /// Build a summary once the overall evaluation has arrived.
    ///
    /// # Errors
    ///
    /// Returns `SessionSummaryError::InvalidTimeRange` if `completed_at` is before `started_at`.
    /// Returns `SessionSummaryError::NoQuestions` if `questions` is zero.
    pub fn new(
        session_id: SessionId,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        questions: u32,
        evaluation: &OverallEvaluation,
    ) -> Result<Self, SessionSummaryError> {
        if completed_at < started_at {
            return Err(SessionSummaryError::InvalidTimeRange);
        }
        if questions == 0 {
            return Err(SessionSummaryError::NoQuestions);
        }

        Ok(Self {
            session_id,
            started_at,
            completed_at,
            questions,
            level: evaluation.skill_level(),
        })
    }

    #[must_use]
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn questions(&self) -> u32 {
        self.questions
    }

    #[must_use]
    pub fn level(&self) -> Option<SkillLevel> {
        self.level
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.completed_at - self.started_at
    }
}
