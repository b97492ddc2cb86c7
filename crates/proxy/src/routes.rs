use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use quiz_core::model::OverallEvaluation;
use services::TextGenerator;
use services::evaluation::wire::{
    EVALUATE_ANSWER, EVALUATE_OVERALL, EvaluateAnswerRequest, EvaluateAnswerResponse,
    EvaluateOverallRequest, EvaluateOverallResponse,
};
use services::prompts::{ANSWER_MAX_TOKENS, OVERALL_MAX_TOKENS, answer_prompt, overall_prompt};

use crate::config::ProxyConfig;
use crate::error::{
    ANSWER_FALLBACK, ApiError, INVALID_BATCH, MISSING_ANSWER, OVERALL_FALLBACK,
};

/// Shared handler state.
#[derive(Clone)]
pub struct ProxyState {
    generator: Arc<dyn TextGenerator>,
}

impl ProxyState {
    #[must_use]
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }
}

/// Builds the router serving both evaluation functions under `config.prefix`.
pub fn router(config: &ProxyConfig, state: ProxyState) -> Router {
    Router::new()
        .route(
            &config.route(EVALUATE_ANSWER),
            post(evaluate_answer)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            &config.route(EVALUATE_OVERALL),
            post(evaluate_overall)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

//
// ─── HANDLERS ──────────────────────────────────────────────────────────────────
//

async fn preflight() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
        ],
    )
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

async fn evaluate_answer(
    State(state): State<ProxyState>,
    payload: Result<Json<EvaluateAnswerRequest>, JsonRejection>,
) -> Result<Json<EvaluateAnswerResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(%rejection, "rejected evaluate-answer body");
        ApiError::BadRequest(MISSING_ANSWER)
    })?;
    if request.user_answer.trim().is_empty() || request.scenario.text().trim().is_empty() {
        return Err(ApiError::BadRequest(MISSING_ANSWER));
    }

    let prompt = answer_prompt(request.scenario.text(), &request.user_answer);
    let feedback = state
        .generator
        .generate(&prompt, ANSWER_MAX_TOKENS)
        .await
        .map_err(|err| {
            warn!(scenario = %request.scenario.id(), %err, "answer evaluation failed upstream");
            ApiError::generation(err, ANSWER_FALLBACK)
        })?;

    info!(scenario = %request.scenario.id(), "answer evaluated");
    Ok(Json(EvaluateAnswerResponse { feedback }))
}

async fn evaluate_overall(
    State(state): State<ProxyState>,
    payload: Result<Json<EvaluateOverallRequest>, JsonRejection>,
) -> Result<Json<EvaluateOverallResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(%rejection, "rejected evaluate-overall body");
        ApiError::BadRequest(INVALID_BATCH)
    })?;

    let prompt = overall_prompt(&request.questions_and_answers);
    let text = state
        .generator
        .generate(&prompt, OVERALL_MAX_TOKENS)
        .await
        .map_err(|err| {
            warn!(%err, "overall evaluation failed upstream");
            ApiError::generation(err, OVERALL_FALLBACK)
        })?;

    let parsed = OverallEvaluation::parse_detailed(&text);
    if parsed.is_degraded() {
        warn!(
            missing_level = parsed.missing_level,
            missing_summary = parsed.missing_summary,
            "overall evaluation text lacked expected markers"
        );
    }
    info!(
        questions = request.questions_and_answers.len(),
        level = %parsed.evaluation.level,
        "overall evaluation complete"
    );
    Ok(Json(EvaluateOverallResponse {
        evaluation: parsed.evaluation.into(),
    }))
}
