use async_trait::async_trait;
use sqlx::Row;

use crate::repository::{PreferencesRepository, StorageError};
use photo_core::prefs::Preferences;

use super::SqliteRepository;

#[async_trait]
impl PreferencesRepository for SqliteRepository {
    async fn get_preferences(&self) -> Result<Option<Preferences>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT theme
            FROM preferences
            WHERE id = 1
            ",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let theme: String = row
            .try_get("theme")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        Ok(Some(Preferences::from_persisted(&theme)))
    }

    async fn save_preferences(&self, preferences: &Preferences) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO preferences (id, theme)
            VALUES (?1, ?2)
            ON CONFLICT(id) DO UPDATE SET
                theme = excluded.theme
            ",
        )
        .bind(1_i64)
        .bind(preferences.theme().as_str())
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}
