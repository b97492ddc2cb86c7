use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;

use quiz_core::Catalog;
use quiz_core::model::{OverallEvaluation, QuestionResult, Scenario, SkillLevel};
use quiz_core::time::fixed_now;
use services::{
    Clock, EvaluationClient, EvaluationError, Phase, QuestionStep, QuizSession, SessionError,
};

/// Scripted client: pops queued answer outcomes, falls back to echo feedback.
#[derive(Default)]
struct ScriptedClient {
    answer_failures: Mutex<VecDeque<EvaluationError>>,
    overall_text: Option<String>,
    answer_calls: AtomicUsize,
    overall_calls: AtomicUsize,
}

impl ScriptedClient {
    fn failing_once(error: EvaluationError) -> Self {
        Self {
            answer_failures: Mutex::new(VecDeque::from([error])),
            ..Self::default()
        }
    }
}

#[async_trait]
impl EvaluationClient for ScriptedClient {
    async fn evaluate_answer(
        &self,
        scenario: &Scenario,
        answer: &str,
    ) -> Result<String, EvaluationError> {
        self.answer_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.answer_failures.lock().unwrap().pop_front() {
            return Err(err);
        }
        Ok(format!("**What you did well:**\n- {} / {answer}", scenario.id()))
    }

    async fn evaluate_overall(
        &self,
        results: &[QuestionResult],
    ) -> Result<OverallEvaluation, EvaluationError> {
        self.overall_calls.fetch_add(1, Ordering::SeqCst);
        let text = self.overall_text.clone().unwrap_or_else(|| {
            format!("LEVEL: Senior Designer\n\nSUMMARY: Answered {}.", results.len())
        });
        Ok(OverallEvaluation::parse(&text))
    }
}

fn fresh_session(seed: u64) -> QuizSession {
    let mut session = QuizSession::new(Clock::fixed(fixed_now()));
    session
        .start_with_rng(Catalog::builtin(), &mut StdRng::seed_from_u64(seed))
        .expect("start session");
    session
}

#[tokio::test]
async fn full_session_reaches_complete() {
    let client = ScriptedClient::default();
    let mut session = fresh_session(42);

    for number in 1..=5 {
        session.set_draft(format!("My answer to question {number}"));
        session.submit_answer(&client).await.expect("submit answer");
        assert_eq!(session.answers().len(), session.feedback().len());
        assert!(
            session
                .feedback_for(number - 1)
                .unwrap()
                .starts_with("**What you did well:**")
        );
        session.next().expect("advance");
    }

    let evaluation = session
        .request_overall(&client)
        .await
        .expect("overall evaluation")
        .clone();
    assert_eq!(evaluation.level, "Senior Designer");
    assert_eq!(evaluation.summary, "Answered 5.");
    assert_eq!(evaluation.skill_level(), Some(SkillLevel::Senior));
    assert!(session.is_complete());
    assert_eq!(client.answer_calls.load(Ordering::SeqCst), 5);
    assert_eq!(client.overall_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn blank_answer_never_reaches_client() {
    let client = ScriptedClient::default();
    let mut session = fresh_session(1);
    session.set_draft("    ");

    let err = session.submit_answer(&client).await.unwrap_err();
    assert!(matches!(
        err,
        SessionError::Evaluation(EvaluationError::Validation)
    ));
    assert_eq!(client.answer_calls.load(Ordering::SeqCst), 0);
    assert_eq!(
        session.phase(),
        Phase::InProgress {
            index: 0,
            step: QuestionStep::Unanswered
        }
    );
}

#[tokio::test]
async fn network_failure_preserves_draft_and_retry_succeeds() {
    let client = ScriptedClient::failing_once(EvaluationError::Upstream {
        status: 502,
        message: "Failed to get feedback. Please try again.".into(),
    });
    let mut session = fresh_session(2);
    session.set_draft("Ask for the data behind the claim.");

    let err = session.submit_answer(&client).await.unwrap_err();
    assert!(matches!(err, SessionError::Evaluation(_)));
    assert_eq!(session.draft(), "Ask for the data behind the claim.");
    assert!(!session.last_error().unwrap_or_default().is_empty());
    assert!(session.answers().is_empty());
    assert_eq!(
        session.phase().step(),
        Some(QuestionStep::Failed)
    );

    session.submit_answer(&client).await.expect("retry");
    assert_eq!(session.answers(), ["Ask for the data behind the claim."]);
    assert_eq!(session.feedback().len(), 1);
    assert_eq!(session.last_error(), None);
    assert_eq!(client.answer_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn unmarked_overall_text_degrades_to_defaults() {
    let client = ScriptedClient {
        overall_text: Some("The candidate wrote very little.".into()),
        ..ScriptedClient::default()
    };
    let mut session = fresh_session(3);
    for _ in 0..5 {
        session.set_draft("ok");
        session.submit_answer(&client).await.unwrap();
        session.next().unwrap();
    }

    let evaluation = session.request_overall(&client).await.unwrap().clone();
    assert_eq!(evaluation.level, "Mid Designer");
    assert_eq!(evaluation.summary, "The candidate wrote very little.");
}

#[tokio::test]
async fn overall_before_last_question_is_rejected() {
    let client = ScriptedClient::default();
    let mut session = fresh_session(4);
    let err = session.request_overall(&client).await.unwrap_err();
    assert!(matches!(err, SessionError::NotAwaitingOverall));
    assert_eq!(client.overall_calls.load(Ordering::SeqCst), 0);
}
