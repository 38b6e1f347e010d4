#![forbid(unsafe_code)]

pub mod drill_session;
pub mod drills;
pub mod error;
pub mod preferences_service;

pub use drill_session::{DrillKind, DrillSession, SubmitOutcome};
pub use error::PreferencesServiceError;
pub use preferences_service::PreferencesService;
