mod drill;
mod home;

pub use drill::{
    DrillView, ExposureDrillView, FlashDrillView, HyperfocalDrillView, InverseSquareDrillView,
};
pub use home::HomeView;
