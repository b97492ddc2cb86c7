//! JSON bodies exchanged with the evaluation endpoints.

use serde::{Deserialize, Serialize};

use quiz_core::model::{OverallEvaluation, QuestionResult, Scenario};

pub const EVALUATE_ANSWER: &str = "evaluate-answer";
pub const EVALUATE_OVERALL: &str = "evaluate-overall";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateAnswerRequest {
    pub scenario: Scenario,
    pub user_answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluateAnswerResponse {
    pub feedback: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateOverallRequest {
    pub questions_and_answers: Vec<QuestionResult>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluateOverallResponse {
    pub evaluation: EvaluationPayload,
}

/// The `evaluation` field: normally structured, tolerated as raw evaluator text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EvaluationPayload {
    Structured(OverallEvaluation),
    Raw(String),
}

impl From<OverallEvaluation> for EvaluationPayload {
    fn from(evaluation: OverallEvaluation) -> Self {
        EvaluationPayload::Structured(evaluation)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::Catalog;

    #[test]
    fn answer_request_uses_camel_case() {
        let scenario = Catalog::builtin().scenarios()[0].clone();
        let body = EvaluateAnswerRequest {
            scenario,
            user_answer: "Push back.".into(),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["userAnswer"], "Push back.");
        assert!(value["scenario"]["scenario"].is_string());
    }

    #[test]
    fn evaluation_accepts_object_or_string() {
        let structured: EvaluateOverallResponse =
            serde_json::from_str(r#"{"evaluation":{"level":"Lead Designer","summary":"Great."}}"#)
                .unwrap();
        assert_eq!(
            structured.evaluation,
            EvaluationPayload::Structured(OverallEvaluation::new("Lead Designer", "Great."))
        );

        let raw: EvaluateOverallResponse =
            serde_json::from_str(r#"{"evaluation":"LEVEL: Junior Designer\nSUMMARY: Thin."}"#)
                .unwrap();
        assert!(matches!(raw.evaluation, EvaluationPayload::Raw(_)));
    }
}
