#![forbid(unsafe_code)]

pub mod error;
pub mod evaluation;
pub mod generation;
pub mod logging;
pub mod prompts;
pub mod sessions;

pub use quiz_core::Clock;
pub use sessions as session;

pub use error::{EndpointError, EvaluationError, GenerationError, SessionError};
pub use evaluation::{
    DEFAULT_ENDPOINT, EvaluationClient, EvaluationEndpoint, HttpEvaluationClient,
};
pub use logging::init_tracing;
pub use generation::{AnthropicConfig, TextGenerationService, TextGenerator};
pub use sessions::{
    PendingAnswer, PendingOverall, Phase, QuestionStep, QuizSession, SessionProgress,
};
