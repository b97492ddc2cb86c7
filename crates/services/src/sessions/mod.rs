mod controller;
mod phase;
mod progress;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use controller::{PendingAnswer, PendingOverall, QuizSession};
pub use phase::{Phase, QuestionStep};
pub use progress::SessionProgress;
