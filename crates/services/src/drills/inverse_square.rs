use rand::Rng;

use photo_core::question::{Answer, Question};

/// Reference point: 100% intensity at 1 meter.
const BASE_DISTANCE_M: u32 = 1;
const BASE_INTENSITY_PERCENT: u32 = 100;

/// Distances to ask about, in whole meters.
const DISTANCE_RANGE: std::ops::RangeInclusive<u32> = 2..=10;

/// Accepted error for distance answers, in meters.
const DISTANCE_TOLERANCE_M: f64 = 0.2;

/// Remaining intensity at `distance` meters, as a rounded percentage of the
/// 1-meter reference.
fn intensity_percent(distance: u32) -> u32 {
    let squared = distance * distance;
    // Integer rounding of 100 / distance².
    (2 * BASE_INTENSITY_PERCENT + squared) / (2 * squared)
}

/// Generates an inverse-square falloff question, asking either for the
/// intensity at a distance or for the distance matching an intensity.
pub fn generate(rng: &mut impl Rng) -> Question {
    let distance = rng.random_range(DISTANCE_RANGE);
    let intensity = intensity_percent(distance);

    if rng.random_bool(0.5) {
        Question::new(
            format!(
                "At {BASE_DISTANCE_M} meter the light intensity is \
                 {BASE_INTENSITY_PERCENT}%. What percentage of intensity do you have at \
                 {distance} meters? (inverse-square law)"
            ),
            Answer::Percent(intensity),
        )
    } else {
        Question::new(
            format!(
                "At {BASE_DISTANCE_M} meter the light intensity is \
                 {BASE_INTENSITY_PERCENT}%. At roughly what distance is the intensity \
                 {intensity}%?"
            ),
            Answer::DistanceMeters {
                value: f64::from(distance),
                tolerance: DISTANCE_TOLERANCE_M,
            },
        )
    }
}
