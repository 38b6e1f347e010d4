use rand::Rng;

use photo_core::question::{Answer, Question, format_compact};
use photo_core::scales::Aperture;

/// Flash questions draw from f/2 through f/16 (scale indices 1..=7); the
/// extreme ends of the aperture table make unrealistic guide numbers.
const APERTURE_INDICES: std::ops::Range<usize> = 1..8;

/// Guide-number distances are whole meters.
const DISTANCE_RANGE: std::ops::RangeInclusive<u32> = 1..=10;

/// Generates a guide-number question: `GN = aperture × distance` at ISO 100,
/// asking for either the aperture or the maximum subject distance.
pub fn generate(rng: &mut impl Rng) -> Question {
    loop {
        let Some(aperture) = Aperture::from_index(rng.random_range(APERTURE_INDICES)) else {
            continue;
        };
        let distance = rng.random_range(DISTANCE_RANGE);
        let guide_number = format_compact(aperture.value() * f64::from(distance));

        return if rng.random_bool(0.5) {
            Question::new(
                format!(
                    "Your flash has a guide number (GN) of {guide_number} at ISO 100. Your \
                     subject is {distance} meters away. Which aperture should you use?"
                ),
                Answer::Aperture(aperture),
            )
        } else {
            Question::new(
                format!(
                    "Your flash has a guide number (GN) of {guide_number} at ISO 100. You are \
                     shooting at {aperture}. How far away can your subject be, at most \
                     (in meters)?"
                ),
                Answer::DistanceMeters {
                    value: f64::from(distance),
                    tolerance: 1e-9,
                },
            )
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn apertures_stay_in_the_flash_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..300 {
            let question = generate(&mut rng);
            if let Answer::Aperture(aperture) = question.answer() {
                assert!((2.0..=16.0).contains(&aperture.value()));
            }
        }
    }

    #[test]
    fn distance_answers_are_whole_meters() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut seen_distance = false;
        for _ in 0..300 {
            let question = generate(&mut rng);
            if let Answer::DistanceMeters { value, tolerance } = question.answer() {
                seen_distance = true;
                assert_eq!(value.fract(), 0.0);
                assert!((1.0..=10.0).contains(value));
                assert!(*tolerance < 0.01, "flash distance is an exact answer");
            }
        }
        assert!(seen_distance);
    }

    #[test]
    fn generated_answers_verify_against_their_own_text() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..300 {
            let question = generate(&mut rng);
            let canonical = question.answer().display();
            assert!(question.answer().check(&canonical));
        }
    }

    #[test]
    fn guide_number_in_prompt_matches_the_pair() {
        // GN 22.4 only arises from f/2.8 × 8 m or f/5.6 × 4 m etc.; spot-check
        // that the displayed GN keeps its one decimal.
        assert_eq!(format_compact(2.8 * 8.0), "22.4");
        assert_eq!(format_compact(8.0 * 5.0), "40");
    }
}
