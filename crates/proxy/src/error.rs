use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use services::GenerationError;
use services::evaluation::wire::ErrorBody;

pub const MISSING_ANSWER: &str = "Missing scenario or userAnswer";
pub const INVALID_BATCH: &str = "Invalid questionsAndAnswers data";
pub const ANSWER_FALLBACK: &str = "Failed to get feedback. Please try again.";
pub const OVERALL_FALLBACK: &str = "Failed to get overall evaluation. Please try again.";
const AUTH_FAILED: &str = "Authentication failed. API key may be invalid or missing.";

/// Every failure the proxy reports, rendered as `{"error": message}`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(&'static str),
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("{message}")]
    Generation { status: StatusCode, message: String },
}

impl ApiError {
    /// Maps an upstream failure to the status and text the browser contract expects.
    pub fn generation(err: GenerationError, fallback: &'static str) -> Self {
        let (status, message) = match err {
            GenerationError::MissingApiKey | GenerationError::InvalidApiKey => {
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            GenerationError::HttpStatus { status, message } => {
                let status =
                    StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                let message = if status == StatusCode::UNAUTHORIZED {
                    AUTH_FAILED.to_string()
                } else {
                    message
                        .filter(|message| !message.trim().is_empty())
                        .unwrap_or_else(|| fallback.to_string())
                };
                (status, message)
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, fallback.to_string()),
        };
        ApiError::Generation { status, message }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Generation { status, .. } => *status,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorBody::new(self.to_string()))).into_response()
    }
}
