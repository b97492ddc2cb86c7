use std::sync::Arc;

use dioxus::prelude::*;
use tracing::{debug, warn};

use quiz_core::Catalog;
use quiz_core::panels::{PanelId, PanelManager, Point, ResizeCorner, Viewport};
use services::{Clock, EvaluationClient, Phase, QuizSession, SessionError};

/// Panels shown while answering questions, left to right.
pub const WORKSPACE_PANELS: [PanelId; 3] = [PanelId::Question, PanelId::Answer, PanelId::Feedback];

/// Quiz and window state shared by every route.
///
/// Both halves are signals, so the store is `Copy` and every action takes `self` by value.
/// Views read the signals directly and mutate only through these actions.
#[derive(Clone, Copy, PartialEq)]
pub struct QuizStore {
    pub session: Signal<QuizSession>,
    pub panels: Signal<PanelManager>,
}

impl QuizStore {
    /// Must be called from inside a component scope.
    #[must_use]
    pub fn new(session: QuizSession, panels: PanelManager) -> Self {
        Self {
            session: Signal::new(session),
            panels: Signal::new(panels),
        }
    }

    //
    // ─── QUIZ FLOW ─────────────────────────────────────────────────────────────
    //

    /// Starts a fresh run and lays out the question desktop.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotEnoughScenarios` for an undersized catalog.
    pub fn start(self, catalog: &Catalog) -> Result<(), SessionError> {
        let mut session = self.session;
        session.write().start(catalog)?;
        let mut panels = self.panels;
        let mut panels = panels.write();
        panels.retain(&[]);
        for id in WORKSPACE_PANELS {
            panels.open(id);
        }
        panels.ensure_layout();
        Ok(())
    }

    /// Makes sure the question desktop shows exactly the workspace panels.
    pub fn show_workspace(self) {
        let missing = {
            let panels = self.panels.peek();
            WORKSPACE_PANELS.iter().any(|id| !panels.is_open(*id))
                || panels.is_open(PanelId::Results)
        };
        if !missing {
            return;
        }
        let mut panels = self.panels;
        let mut panels = panels.write();
        panels.retain(&[PanelId::Question, PanelId::Answer, PanelId::Feedback, PanelId::Help]);
        for id in WORKSPACE_PANELS {
            if !panels.is_open(id) {
                panels.open(id);
            }
        }
        panels.ensure_layout();
    }

    /// Swaps the desktop over to the single results window.
    pub fn show_results(self) {
        if self.panels.peek().is_open(PanelId::Results) {
            return;
        }
        let mut panels = self.panels;
        let mut panels = panels.write();
        panels.retain(&[]);
        panels.open(PanelId::Results);
        panels.ensure_layout();
    }

    pub fn set_draft(self, text: String) {
        let mut session = self.session;
        session.write().set_draft(text);
    }

    /// Evaluates the current draft. Failures stay on the session as `last_error`.
    pub async fn submit_answer(self, client: Arc<dyn EvaluationClient>) {
        let mut session = self.session;
        let pending = match session.write().begin_submit() {
            Ok(pending) => pending,
            Err(err) => {
                debug!(%err, "submit refused");
                return;
            }
        };
        let outcome = client
            .evaluate_answer(&pending.scenario, &pending.answer)
            .await;
        if let Err(err) = session.write().finish_submit(pending, outcome) {
            warn!(%err, "answer submission did not complete");
        }
    }

    /// Moves past the answered question; the last one leads to the results desktop.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotAnswered` if the current question has no feedback yet.
    pub fn advance(self) -> Result<Phase, SessionError> {
        let mut session = self.session;
        let phase = session.write().next()?;
        if matches!(phase, Phase::AwaitingOverall { .. }) {
            self.show_results();
        }
        Ok(phase)
    }

    /// Requests the overall evaluation. Failures stay on the session as `last_error`.
    pub async fn request_overall(self, client: Arc<dyn EvaluationClient>) {
        let mut session = self.session;
        let pending = match session.write().begin_overall() {
            Ok(pending) => pending,
            Err(err) => {
                debug!(%err, "overall request refused");
                return;
            }
        };
        let outcome = client.evaluate_overall(&pending.results).await;
        if let Err(err) = session.write().finish_overall(pending, outcome) {
            warn!(%err, "overall evaluation did not complete");
        }
    }

    pub fn dismiss_error(self) {
        let mut session = self.session;
        session.write().dismiss_error();
    }

    /// Clears the run and every window.
    pub fn start_over(self) {
        let mut session = self.session;
        session.write().reset();
        let mut panels = self.panels;
        panels.write().retain(&[]);
    }

    //
    // ─── WINDOWS ───────────────────────────────────────────────────────────────
    //

    pub fn open_help(self) {
        let mut panels = self.panels;
        let mut panels = panels.write();
        panels.open(PanelId::Help);
        panels.ensure_layout();
    }

    pub fn close_panel(self, id: PanelId) {
        let mut panels = self.panels;
        panels.write().close(id);
    }

    pub fn set_viewport(self, width: f64, height: f64) {
        let viewport = Viewport::new(width, height);
        if self.panels.peek().viewport() == viewport {
            return;
        }
        debug!(width = viewport.width, height = viewport.height, "viewport changed");
        let mut panels = self.panels;
        panels.write().set_viewport(viewport);
    }

    pub fn focus(self, id: PanelId) {
        if self.panels.peek().top() == Some(id) {
            return;
        }
        let mut panels = self.panels;
        panels.write().bring_to_front(id);
    }

    pub fn begin_drag(self, id: PanelId, pointer: Point) {
        let mut panels = self.panels;
        if panels.write().begin_drag(id, pointer) {
            debug!(panel = %id, x = pointer.x, y = pointer.y, "drag started");
        }
    }

    pub fn begin_resize(self, id: PanelId, pointer: Point, corner: ResizeCorner) {
        let mut panels = self.panels;
        if panels.write().begin_resize(id, pointer, corner) {
            debug!(panel = %id, corner = corner.as_str(), "resize started");
        }
    }

    /// Forwards pointer motion to whichever panel owns the current gesture.
    pub fn pointer_moved(self, pointer: Point) {
        if self.panels.peek().active().is_none() {
            return;
        }
        let mut panels = self.panels;
        panels.write().pointer_moved(pointer);
    }

    pub fn pointer_released(self) {
        let Some(id) = self.panels.peek().active() else {
            return;
        };
        debug!(panel = %id, "gesture ended");
        let mut panels = self.panels;
        panels.write().pointer_released();
    }
}

/// Creates the store for this subtree. Call once near the root.
pub fn use_quiz_store_provider(clock: Clock) -> QuizStore {
    use_context_provider(|| QuizStore::new(QuizSession::new(clock), PanelManager::default()))
}

#[must_use]
pub fn use_quiz_store() -> QuizStore {
    use_context::<QuizStore>()
}
