use std::sync::Arc;

use photo_core::prefs::{Preferences, Theme};
use storage::repository::PreferencesRepository;

use crate::error::PreferencesServiceError;

#[derive(Clone)]
pub struct PreferencesService {
    repo: Arc<dyn PreferencesRepository>,
}

impl PreferencesService {
    #[must_use]
    pub fn new(repo: Arc<dyn PreferencesRepository>) -> Self {
        Self { repo }
    }

    /// Load persisted preferences (or defaults if nothing was saved yet).
    ///
    /// # Errors
    ///
    /// Returns `PreferencesServiceError` on storage failures.
    pub async fn load(&self) -> Result<Preferences, PreferencesServiceError> {
        let preferences = self.repo.get_preferences().await?;
        Ok(preferences.unwrap_or_default())
    }

    /// Persist the chosen theme.
    ///
    /// # Errors
    ///
    /// Returns `PreferencesServiceError` if persistence fails.
    pub async fn save_theme(&self, theme: Theme) -> Result<Preferences, PreferencesServiceError> {
        let preferences = Preferences::new(theme);
        self.repo.save_preferences(&preferences).await?;
        Ok(preferences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::repository::MemoryPreferencesRepository;

    #[tokio::test]
    async fn load_defaults_to_light_when_nothing_saved() {
        let service = PreferencesService::new(Arc::new(MemoryPreferencesRepository::new()));
        let preferences = service.load().await.unwrap();
        assert_eq!(preferences.theme(), Theme::Light);
    }

    #[tokio::test]
    async fn saved_theme_survives_reload() {
        let service = PreferencesService::new(Arc::new(MemoryPreferencesRepository::new()));
        service.save_theme(Theme::Dark).await.unwrap();
        let preferences = service.load().await.unwrap();
        assert_eq!(preferences.theme(), Theme::Dark);
    }
}
