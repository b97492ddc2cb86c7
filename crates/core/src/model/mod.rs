mod evaluation;
mod ids;
mod scenario;
mod session;

pub use ids::{ScenarioId, SessionId};

pub use evaluation::{
    FALLBACK_LEVEL, OverallEvaluation, ParsedEvaluation, QuestionResult, SkillLevel,
};
pub use scenario::{Category, Difficulty, Scenario, ScenarioError, split_paragraphs};
pub use session::{SessionSummary, SessionSummaryError};
