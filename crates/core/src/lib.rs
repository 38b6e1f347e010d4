#![forbid(unsafe_code)]

pub mod normalize;
pub mod prefs;
pub mod question;
pub mod scales;
pub mod tally;

pub use normalize::InputError;
pub use prefs::{Preferences, Theme};
pub use question::{Answer, Question};
pub use scales::{Aperture, Iso, ShutterSpeed};
pub use tally::ScoreTally;
