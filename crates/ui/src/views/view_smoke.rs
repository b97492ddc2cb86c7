use quiz_core::model::OverallEvaluation;
use quiz_core::panels::{PanelId, PanelManager};
use services::EvaluationError;

use super::test_harness::{
    ViewKind, answer_current, answered_session, setup_view_harness, started_session,
};

fn workspace_with_help() -> PanelManager {
    let mut panels = PanelManager::default();
    for id in [
        PanelId::Question,
        PanelId::Answer,
        PanelId::Feedback,
        PanelId::Help,
    ] {
        panels.open(id);
    }
    panels.ensure_layout();
    panels
}

#[tokio::test(flavor = "current_thread")]
async fn landing_view_smoke_renders_start() {
    let mut harness =
        setup_view_harness(ViewKind::Landing, started_session(), PanelManager::default());
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Practice UX Leadership Scenarios"),
        "missing heading in {html}"
    );
    assert!(html.contains("Start Practice"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn question_view_smoke_lays_out_three_windows() {
    let mut harness = setup_view_harness(
        ViewKind::Question(1),
        started_session(),
        PanelManager::default(),
    );
    harness.rebuild();
    let html = harness.render();

    for id in ["window-question", "window-answer", "window-feedback"] {
        assert!(html.contains(id), "missing {id} in {html}");
    }
    assert!(html.contains("Question 1 of 5 - "), "missing title in {html}");
    assert!(html.contains("What do you do?"), "missing prompt in {html}");
    assert!(html.contains("Your answer - Notepad"), "missing notepad in {html}");
    assert!(html.contains("Analyzer 3000"), "missing analyzer in {html}");
    assert!(html.contains("Waiting for submission..."), "missing waiting in {html}");
    assert!(html.contains("Submit answer"), "missing submit in {html}");
    assert!(html.contains("0 of 5 answered"), "missing progress in {html}");
    assert!(html.contains("top: 40px"), "missing tiled layout in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn question_view_smoke_renders_feedback_markdown() {
    let mut session = started_session();
    answer_current(&mut session, "Ask the researchers first.");
    let mut harness =
        setup_view_harness(ViewKind::Question(1), session, PanelManager::default());
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("<strong>What you did well:</strong>"),
        "missing feedback heading in {html}"
    );
    assert!(html.contains("<li>Good</li>"), "missing feedback item in {html}");
    assert!(html.contains("Next Question"), "missing next button in {html}");
    assert!(!html.contains("Submit answer"), "submit should be gone in {html}");
    assert!(html.contains("1 of 5 answered"), "missing progress in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn question_view_smoke_offers_results_after_last_answer() {
    let mut session = started_session();
    for number in 1..=4 {
        answer_current(&mut session, &format!("answer {number}"));
        session.next().unwrap();
    }
    answer_current(&mut session, "last one");
    let mut harness =
        setup_view_harness(ViewKind::Question(5), session, PanelManager::default());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Question 5 of 5 - "), "missing title in {html}");
    assert!(html.contains("View Results"), "missing results button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn question_view_smoke_shows_retry_after_failure() {
    let mut session = started_session();
    session.set_draft("Push back on the deadline.");
    let pending = session.begin_submit().unwrap();
    let _ = session.finish_submit(
        pending,
        Err(EvaluationError::Upstream {
            status: 500,
            message: "Failed to get feedback. Please try again.".into(),
        }),
    );

    let mut harness =
        setup_view_harness(ViewKind::Question(1), session, PanelManager::default());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("error-popup"), "missing popup in {html}");
    assert!(
        html.contains("Failed to get feedback. Please try again."),
        "missing error text in {html}"
    );
    assert!(html.contains("Retry"), "missing retry in {html}");
    assert!(html.contains("Submit answer"), "submit should remain in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn question_view_smoke_ignores_mismatched_number() {
    let mut harness = setup_view_harness(
        ViewKind::Question(3),
        started_session(),
        PanelManager::default(),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(!html.contains("Analyzer 3000"), "unexpected desktop in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn question_view_smoke_renders_help_window() {
    let mut harness = setup_view_harness(
        ViewKind::Question(1),
        started_session(),
        workspace_with_help(),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("window-help"), "missing help window in {html}");
    assert!(
        html.contains("There is no single right answer."),
        "missing help text in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_renders_level_and_reviews() {
    let mut session = answered_session();
    let pending = session.begin_overall().unwrap();
    session
        .finish_overall(
            pending,
            Ok(OverallEvaluation::parse(
                "LEVEL: Senior Designer\n\nSUMMARY: Solid work.",
            )),
        )
        .unwrap();

    let mut harness = setup_view_harness(ViewKind::Results, session, PanelManager::default());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("window-results"), "missing results window in {html}");
    assert!(html.contains("Senior Designer"), "missing level in {html}");
    assert!(html.contains("#17a2b8"), "missing badge colour in {html}");
    assert!(html.contains("Solid work."), "missing summary in {html}");
    assert!(html.contains("Your Responses"), "missing review list in {html}");
    assert!(html.contains("Question 5: "), "missing fifth review in {html}");
    assert!(html.contains("Answer number 3"), "missing answer in {html}");
    assert!(html.contains("Start Over"), "missing start over in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_shows_loading_while_requesting() {
    let mut session = answered_session();
    let _pending = session.begin_overall().unwrap();

    let mut harness = setup_view_harness(ViewKind::Results, session, PanelManager::default());
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Analyzing your overall performance..."),
        "missing loading text in {html}"
    );
    assert!(!html.contains("level-badge"), "unexpected badge in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_requires_finished_session() {
    let mut harness = setup_view_harness(
        ViewKind::Results,
        started_session(),
        PanelManager::default(),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(!html.contains("Your Results"), "unexpected results in {html}");
}
