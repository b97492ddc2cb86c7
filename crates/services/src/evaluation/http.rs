use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use quiz_core::model::{OverallEvaluation, QuestionResult, Scenario};

use super::client::EvaluationClient;
use super::endpoint::EvaluationEndpoint;
use super::wire::{
    EVALUATE_ANSWER, EVALUATE_OVERALL, ErrorBody, EvaluateAnswerRequest, EvaluateAnswerResponse,
    EvaluateOverallRequest, EvaluateOverallResponse, EvaluationPayload,
};
use crate::error::EvaluationError;

/// `EvaluationClient` speaking JSON over HTTP to the evaluation functions.
#[derive(Clone)]
pub struct HttpEvaluationClient {
    client: Client,
    endpoint: EvaluationEndpoint,
}

impl HttpEvaluationClient {
    #[must_use]
    pub fn new(endpoint: EvaluationEndpoint) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &EvaluationEndpoint {
        &self.endpoint
    }

    async fn post<B, R>(&self, function: &str, body: &B) -> Result<R, EvaluationError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = self.endpoint.url_for(function);
        debug!(%url, "posting evaluation request");

        let response = self.client.post(url).json(body).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&bytes)
                .map(|body| body.error)
                .ok()
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| format!("Evaluation service returned status {status}."));
            warn!(function, status = status.as_u16(), %message, "evaluation request failed");
            return Err(EvaluationError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(&bytes).map_err(|err| {
            warn!(function, %err, "evaluation response did not decode");
            EvaluationError::MalformedBody(err.to_string())
        })
    }
}

#[async_trait]
impl EvaluationClient for HttpEvaluationClient {
    async fn evaluate_answer(
        &self,
        scenario: &Scenario,
        answer: &str,
    ) -> Result<String, EvaluationError> {
        let body = EvaluateAnswerRequest {
            scenario: scenario.clone(),
            user_answer: answer.to_string(),
        };
        let response: EvaluateAnswerResponse = self.post(EVALUATE_ANSWER, &body).await?;
        Ok(response.feedback)
    }

    async fn evaluate_overall(
        &self,
        results: &[QuestionResult],
    ) -> Result<OverallEvaluation, EvaluationError> {
        let body = EvaluateOverallRequest {
            questions_and_answers: results.to_vec(),
        };
        let response: EvaluateOverallResponse = self.post(EVALUATE_OVERALL, &body).await?;

        Ok(match response.evaluation {
            EvaluationPayload::Structured(evaluation) => evaluation,
            EvaluationPayload::Raw(text) => {
                let parsed = OverallEvaluation::parse_detailed(&text);
                if parsed.is_degraded() {
                    warn!(
                        missing_level = parsed.missing_level,
                        missing_summary = parsed.missing_summary,
                        "overall evaluation text lacked expected markers"
                    );
                }
                parsed.evaluation
            }
        })
    }
}
