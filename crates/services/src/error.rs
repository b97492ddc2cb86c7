//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::SessionSummaryError;

/// Errors emitted by an `EvaluationClient`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EvaluationError {
    #[error("Please write an answer before submitting.")]
    Validation,
    #[error("Could not reach the evaluation service. Please try again.")]
    Network(#[from] reqwest::Error),
    #[error("{message}")]
    Upstream { status: u16, message: String },
    #[error("The evaluation service sent an unreadable response: {0}")]
    MalformedBody(String),
}

/// Errors emitted while configuring the evaluation endpoint.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EndpointError {
    #[error("invalid evaluation endpoint: {0}")]
    Parse(#[from] url::ParseError),
    #[error("evaluation endpoint must use http or https, got {0}")]
    UnsupportedScheme(String),
}

/// Errors emitted by `TextGenerationService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenerationError {
    #[error("API key configuration error. Please check environment variables.")]
    MissingApiKey,
    #[error("API key format error. Claude API keys should start with sk-ant-")]
    InvalidApiKey,
    #[error("text generation request failed with status {status}")]
    HttpStatus { status: u16, message: Option<String> },
    #[error("text generation returned an empty response")]
    EmptyResponse,
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `QuizSession` transitions.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("the catalog has only {available} scenarios, {required} are needed")]
    NotEnoughScenarios { available: usize, required: usize },
    #[error("no question is waiting for an answer")]
    NotAnswering,
    #[error("the current question has not been answered yet")]
    NotAnswered,
    #[error("an evaluation request is already in flight")]
    InFlight,
    #[error("the session is not waiting for an overall evaluation")]
    NotAwaitingOverall,
    #[error("the pending request no longer matches the session")]
    Stale,
    #[error("the session is not complete")]
    Incomplete,
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
    #[error(transparent)]
    Summary(#[from] SessionSummaryError),
}
