use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::Catalog;
use quiz_core::model::{OverallEvaluation, QuestionResult, Scenario};
use quiz_core::panels::PanelManager;
use quiz_core::time::fixed_now;
use rand::SeedableRng;
use rand::rngs::StdRng;
use services::{Clock, EvaluationClient, EvaluationError, QuizSession};

use crate::context::{UiApp, build_app_context};
use crate::store::QuizStore;
use crate::views::{LandingView, QuestionView, ResultsView};

pub const FEEDBACK: &str = "**What you did well:**\n- Good";

/// Answers every request the same way.
pub struct FakeEvaluator;

#[async_trait]
impl EvaluationClient for FakeEvaluator {
    async fn evaluate_answer(
        &self,
        _scenario: &Scenario,
        _answer: &str,
    ) -> Result<String, EvaluationError> {
        Ok(FEEDBACK.to_string())
    }

    async fn evaluate_overall(
        &self,
        _results: &[QuestionResult],
    ) -> Result<OverallEvaluation, EvaluationError> {
        Ok(OverallEvaluation::parse(
            "LEVEL: Senior Designer\n\nSUMMARY: Solid work.",
        ))
    }
}

#[derive(Clone)]
struct TestApp {
    client: Arc<FakeEvaluator>,
}

impl UiApp for TestApp {
    fn evaluation_client(&self) -> Arc<dyn EvaluationClient> {
        self.client.clone()
    }

    fn catalog(&self) -> &'static Catalog {
        Catalog::builtin()
    }

    fn clock(&self) -> Clock {
        Clock::fixed(fixed_now())
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Landing,
    Question(usize),
    Results,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    session: QuizSession,
    panels: PanelManager,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| QuizStore::new(props.session.clone(), props.panels.clone()));
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Landing => rsx! { LandingView {} },
        ViewKind::Question(number) => rsx! { QuestionView { number } },
        ViewKind::Results => rsx! { ResultsView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(
    view: ViewKind,
    session: QuizSession,
    panels: PanelManager,
) -> ViewHarness {
    let app = Arc::new(TestApp {
        client: Arc::new(FakeEvaluator),
    });
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            session,
            panels,
        },
    );
    ViewHarness { dom }
}

/// A session on question one with a fixed scenario order.
pub fn started_session() -> QuizSession {
    let mut session = QuizSession::new(Clock::fixed(fixed_now()));
    session
        .start_with_rng(Catalog::builtin(), &mut StdRng::seed_from_u64(5))
        .expect("start session");
    session
}

/// Answers the current question with `answer` and the shared fake feedback.
pub fn answer_current(session: &mut QuizSession, answer: &str) {
    session.set_draft(answer);
    let pending = session.begin_submit().expect("begin submit");
    session
        .finish_submit(pending, Ok(FEEDBACK.to_string()))
        .expect("finish submit");
}

/// A session with every question answered, waiting on the overall request.
pub fn answered_session() -> QuizSession {
    let mut session = started_session();
    for number in 1..=5 {
        answer_current(&mut session, &format!("Answer number {number}"));
        session.next().expect("advance");
    }
    session
}
