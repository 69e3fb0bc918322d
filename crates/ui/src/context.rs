use std::sync::Arc;

use services::{AssistantService, DiagnosticService};

/// What the composition root must provide to the presentation shell.
pub trait UiApp: Send + Sync {
    fn diagnostic(&self) -> Arc<DiagnosticService>;
    fn assistant(&self) -> Arc<AssistantService>;
    fn booking_url(&self) -> String;
}

#[derive(Clone)]
pub struct AppContext {
    diagnostic: Arc<DiagnosticService>,
    assistant: Arc<AssistantService>,
    booking_url: String,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            diagnostic: app.diagnostic(),
            assistant: app.assistant(),
            booking_url: app.booking_url(),
        }
    }

    #[must_use]
    pub fn diagnostic(&self) -> Arc<DiagnosticService> {
        Arc::clone(&self.diagnostic)
    }

    #[must_use]
    pub fn assistant(&self) -> Arc<AssistantService> {
        Arc::clone(&self.assistant)
    }

    /// Static external booking link, opened in a new browsing context.
    /// Not parameterized by result category.
    #[must_use]
    pub fn booking_url(&self) -> &str {
        &self.booking_url
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
