use std::sync::Arc;

use photo_core::prefs::Theme;
use services::PreferencesService;

/// UI-facing surface of the composed application.
pub trait UiApp: Send + Sync {
    /// Theme loaded from preferences before launch.
    fn initial_theme(&self) -> Theme;

    fn preferences(&self) -> Arc<PreferencesService>;
}

#[derive(Clone)]
pub struct AppContext {
    initial_theme: Theme,
    preferences: Arc<PreferencesService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            initial_theme: app.initial_theme(),
            preferences: app.preferences(),
        }
    }

    #[must_use]
    pub fn initial_theme(&self) -> Theme {
        self.initial_theme
    }

    #[must_use]
    pub fn preferences(&self) -> Arc<PreferencesService> {
        Arc::clone(&self.preferences)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
