#![forbid(unsafe_code)]

pub mod repository;
pub mod sqlite;

pub use repository::{MemoryPreferencesRepository, PreferencesRepository, Storage, StorageError};
pub use sqlite::{SqliteInitError, SqliteRepository};
