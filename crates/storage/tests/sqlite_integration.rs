use photo_core::prefs::{Preferences, Theme};
use storage::repository::Storage;
use storage::sqlite::SqliteRepository;

#[tokio::test]
async fn sqlite_roundtrip_persists_theme() {
    let storage = Storage::sqlite("sqlite:file:memdb_prefs_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect sqlite");

    assert!(
        storage
            .preferences
            .get_preferences()
            .await
            .expect("read empty")
            .is_none()
    );

    storage
        .preferences
        .save_preferences(&Preferences::new(Theme::Dark))
        .await
        .expect("save dark");
    let loaded = storage
        .preferences
        .get_preferences()
        .await
        .expect("read back")
        .expect("row exists");
    assert_eq!(loaded.theme(), Theme::Dark);

    // Saving again overwrites the single row instead of adding another.
    storage
        .preferences
        .save_preferences(&Preferences::new(Theme::Light))
        .await
        .expect("save light");
    let loaded = storage
        .preferences
        .get_preferences()
        .await
        .expect("read back")
        .expect("row exists");
    assert_eq!(loaded.theme(), Theme::Light);
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_prefs_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.migrate().await.expect("second migrate");
}

#[tokio::test]
async fn unknown_theme_values_fall_back_to_light() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_prefs_lossy?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    sqlx::query("INSERT INTO preferences (id, theme) VALUES (1, 'solarized')")
        .execute(repo.pool())
        .await
        .expect("insert raw row");

    use storage::repository::PreferencesRepository;
    let loaded = repo
        .get_preferences()
        .await
        .expect("read")
        .expect("row exists");
    assert_eq!(loaded.theme(), Theme::Light);
}
