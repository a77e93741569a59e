use std::sync::Arc;

use services::ExamService;

/// Services the UI needs from the composition root.
pub trait UiApp: Send + Sync {
    fn exam_service(&self) -> Arc<ExamService>;
}

#[derive(Clone)]
pub struct AppContext {
    exam_service: Arc<ExamService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            exam_service: app.exam_service(),
        }
    }

    #[must_use]
    pub fn exam_service(&self) -> Arc<ExamService> {
        Arc::clone(&self.exam_service)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
