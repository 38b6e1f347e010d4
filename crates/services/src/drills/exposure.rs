use rand::Rng;
use rand::seq::IndexedRandom;

use photo_core::question::{Answer, Question};
use photo_core::scales::{Aperture, Iso, ShutterSpeed};

/// Stop shifts for the single-dimension variants. Zero is excluded so the
/// unknown always moves.
const SHIFTS: [i32; 6] = [-3, -2, -1, 1, 2, 3];

/// Stop shifts for the ISO variant, applied independently to shutter and
/// aperture. The all-zero pair is rejected during sampling.
const ISO_VARIANT_SHIFTS: [i32; 5] = [-2, -1, 0, 1, 2];

/// Which exposure dimension the question asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Unknown {
    Aperture,
    Shutter,
    Iso,
}

/// A fully derived stop-arithmetic scenario: the starting exposure, the
/// changed exposure, and the dimension left for the user to solve.
///
/// Kept separate from `Question` so the conservation invariant can be checked
/// on the scale positions directly.
#[derive(Clone, Copy, Debug)]
struct Scenario {
    iso: Iso,
    shutter: ShutterSpeed,
    aperture: Aperture,
    new_iso: Iso,
    new_shutter: ShutterSpeed,
    new_aperture: Aperture,
    unknown: Unknown,
}

impl Scenario {
    /// Net light change across all three dimensions, in stops.
    ///
    /// Moving the ISO index up gains light; moving the shutter or aperture
    /// index up loses it. A valid scenario always nets zero.
    fn light_stop_delta(&self) -> i64 {
        let iso = self.new_iso.index() as i64 - self.iso.index() as i64;
        let shutter = self.new_shutter.index() as i64 - self.shutter.index() as i64;
        let aperture = self.new_aperture.index() as i64 - self.aperture.index() as i64;
        iso - shutter - aperture
    }

    fn into_question(self) -> Question {
        let Self {
            iso,
            shutter,
            aperture,
            new_iso,
            new_shutter,
            new_aperture,
            unknown,
        } = self;
        match unknown {
            Unknown::Aperture => Question::new(
                format!(
                    "Start: {iso}, {shutter}, {aperture}. You change the shutter speed to \
                     {new_shutter} (ISO stays the same). Which aperture gives you the same \
                     exposure?"
                ),
                Answer::Aperture(new_aperture),
            ),
            Unknown::Shutter => Question::new(
                format!(
                    "Start: {iso}, {shutter}, {aperture}. You change the aperture to \
                     {new_aperture} (ISO stays the same). Which shutter speed gives you the \
                     same exposure?"
                ),
                Answer::Shutter(new_shutter),
            ),
            Unknown::Iso => Question::new(
                format!(
                    "Start: {iso}, {shutter}, {aperture}. You change the shutter speed to \
                     {new_shutter} and the aperture to {new_aperture}. Which ISO gives you \
                     the same exposure?"
                ),
                Answer::Iso(new_iso),
            ),
        }
    }
}

/// Generates a stop-equivalence question, uniformly over the three variants.
pub fn generate(rng: &mut impl Rng) -> Question {
    scenario(rng).into_question()
}

fn scenario(rng: &mut impl Rng) -> Scenario {
    match rng.random_range(0..3) {
        0 => find_aperture(rng),
        1 => find_shutter(rng),
        _ => find_iso(rng),
    }
}

/// Shutter speed changes, aperture compensates.
fn find_aperture(rng: &mut impl Rng) -> Scenario {
    loop {
        let Some(iso) = Iso::from_index(rng.random_range(0..Iso::COUNT)) else {
            continue;
        };
        let Some(shutter) = ShutterSpeed::from_index(rng.random_range(1..ShutterSpeed::COUNT - 1))
        else {
            continue;
        };
        let Some(aperture) = Aperture::from_index(rng.random_range(1..Aperture::COUNT - 1)) else {
            continue;
        };
        let Some(&delta) = SHIFTS.choose(rng) else {
            continue;
        };

        let Some(new_shutter) = shutter.offset(-delta) else {
            continue;
        };
        let Some(new_aperture) = aperture.offset(delta) else {
            continue;
        };

        return Scenario {
            iso,
            shutter,
            aperture,
            new_iso: iso,
            new_shutter,
            new_aperture,
            unknown: Unknown::Aperture,
        };
    }
}

/// Aperture changes, shutter speed compensates.
fn find_shutter(rng: &mut impl Rng) -> Scenario {
    loop {
        let Some(iso) = Iso::from_index(rng.random_range(0..Iso::COUNT)) else {
            continue;
        };
        let Some(shutter) = ShutterSpeed::from_index(rng.random_range(1..ShutterSpeed::COUNT - 1))
        else {
            continue;
        };
        let Some(aperture) = Aperture::from_index(rng.random_range(1..Aperture::COUNT - 1)) else {
            continue;
        };
        let Some(&delta) = SHIFTS.choose(rng) else {
            continue;
        };

        let Some(new_aperture) = aperture.offset(-delta) else {
            continue;
        };
        let Some(new_shutter) = shutter.offset(delta) else {
            continue;
        };

        return Scenario {
            iso,
            shutter,
            aperture,
            new_iso: iso,
            new_shutter,
            new_aperture,
            unknown: Unknown::Shutter,
        };
    }
}

/// Shutter speed and aperture both change, ISO compensates.
fn find_iso(rng: &mut impl Rng) -> Scenario {
    loop {
        let Some(iso) = Iso::from_index(rng.random_range(1..Iso::COUNT - 1)) else {
            continue;
        };
        let Some(shutter) = ShutterSpeed::from_index(rng.random_range(1..ShutterSpeed::COUNT - 1))
        else {
            continue;
        };
        let Some(aperture) = Aperture::from_index(rng.random_range(1..Aperture::COUNT - 1)) else {
            continue;
        };
        let Some(&shutter_delta) = ISO_VARIANT_SHIFTS.choose(rng) else {
            continue;
        };
        let Some(&aperture_delta) = ISO_VARIANT_SHIFTS.choose(rng) else {
            continue;
        };
        if shutter_delta == 0 && aperture_delta == 0 {
            continue;
        }

        let Some(new_shutter) = shutter.offset(-shutter_delta) else {
            continue;
        };
        let Some(new_aperture) = aperture.offset(-aperture_delta) else {
            continue;
        };
        let Some(new_iso) = iso.offset(-(shutter_delta + aperture_delta)) else {
            continue;
        };

        return Scenario {
            iso,
            shutter,
            aperture,
            new_iso,
            new_shutter,
            new_aperture,
            unknown: Unknown::Iso,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn every_scenario_conserves_exposure() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let scenario = scenario(&mut rng);
            assert_eq!(
                scenario.light_stop_delta(),
                0,
                "exposure not conserved: {scenario:?}"
            );
        }
    }

    #[test]
    fn every_scenario_changes_a_stated_setting() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let scenario = scenario(&mut rng);
            match scenario.unknown {
                Unknown::Aperture => assert_ne!(scenario.new_aperture, scenario.aperture),
                Unknown::Shutter => assert_ne!(scenario.new_shutter, scenario.shutter),
                // Canceling shutter/aperture deltas keep the ISO in place, so
                // only the stated changes are guaranteed to move.
                Unknown::Iso => assert!(
                    scenario.new_shutter != scenario.shutter
                        || scenario.new_aperture != scenario.aperture
                ),
            }
        }
    }

    #[test]
    fn single_dimension_variants_keep_iso_fixed() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let scenario = find_aperture(&mut rng);
            assert_eq!(scenario.new_iso, scenario.iso);
            let scenario = find_shutter(&mut rng);
            assert_eq!(scenario.new_iso, scenario.iso);
        }
    }

    #[test]
    fn generated_answers_verify_against_their_own_text() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..300 {
            let question = generate(&mut rng);
            let canonical = question.answer().display();
            assert!(
                question.answer().check(&canonical),
                "answer {canonical:?} does not verify for {:?}",
                question.prompt()
            );
        }
    }

    #[test]
    fn prompts_mention_the_starting_exposure() {
        let mut rng = StdRng::seed_from_u64(1);
        let question = generate(&mut rng);
        assert!(question.prompt().starts_with("Start: ISO "));
    }
}
