use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use thiserror::Error;

use photo_core::prefs::Preferences;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository contract for user preferences.
#[async_trait]
pub trait PreferencesRepository: Send + Sync {
    /// Fetch the persisted preferences, if any were saved before.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on storage failures; a missing row is `Ok(None)`.
    async fn get_preferences(&self) -> Result<Option<Preferences>, StorageError>;

    /// Persist or update the preferences.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the preferences cannot be stored.
    async fn save_preferences(&self, preferences: &Preferences) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct MemoryPreferencesRepository {
    preferences: Arc<Mutex<Option<Preferences>>>,
}

impl MemoryPreferencesRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferencesRepository for MemoryPreferencesRepository {
    async fn get_preferences(&self) -> Result<Option<Preferences>, StorageError> {
        let guard = self
            .preferences
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(*guard)
    }

    async fn save_preferences(&self, preferences: &Preferences) -> Result<(), StorageError> {
        let mut guard = self
            .preferences
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(*preferences);
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub preferences: Arc<dyn PreferencesRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let preferences: Arc<dyn PreferencesRepository> =
            Arc::new(MemoryPreferencesRepository::new());
        Self { preferences }
    }
}
