use std::sync::Arc;

use quiz_core::Catalog;
use services::{Clock, EvaluationClient};

pub trait UiApp: Send + Sync {
    fn evaluation_client(&self) -> Arc<dyn EvaluationClient>;
    fn catalog(&self) -> &'static Catalog;
    fn clock(&self) -> Clock;
}

#[derive(Clone)]
pub struct AppContext {
    evaluation: Arc<dyn EvaluationClient>,
    catalog: &'static Catalog,
    clock: Clock,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            evaluation: app.evaluation_client(),
            catalog: app.catalog(),
            clock: app.clock(),
        }
    }

    #[must_use]
    pub fn evaluation_client(&self) -> Arc<dyn EvaluationClient> {
        Arc::clone(&self.evaluation)
    }

    #[must_use]
    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    /// Clock new sessions are stamped with.
    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
