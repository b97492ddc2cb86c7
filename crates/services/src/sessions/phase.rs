/// Where the current question is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionStep {
    Unanswered,
    Submitting,
    /// The last submission failed; the draft is intact and may be resubmitted.
    Failed,
    Answered,
}

/// Session state machine.
///
/// `NotStarted → InProgress(0..n) → AwaitingOverall → Complete`, with `reset` returning to
/// `NotStarted` from anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    NotStarted,
    InProgress { index: usize, step: QuestionStep },
    AwaitingOverall { requesting: bool },
    Complete,
}

impl Phase {
    #[must_use]
    pub fn is_in_flight(self) -> bool {
        matches!(
            self,
            Phase::InProgress {
                step: QuestionStep::Submitting,
                ..
            } | Phase::AwaitingOverall { requesting: true }
        )
    }

    #[must_use]
    pub fn question_index(self) -> Option<usize> {
        match self {
            Phase::InProgress { index, .. } => Some(index),
            _ => None,
        }
    }

    #[must_use]
    pub fn step(self) -> Option<QuestionStep> {
        match self {
            Phase::InProgress { step, .. } => Some(step),
            _ => None,
        }
    }
}
