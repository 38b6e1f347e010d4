use rand::Rng;
use rand::seq::IndexedRandom;

use photo_core::question::{Answer, Question};

/// Sensor formats and their circle-of-confusion diameters in millimeters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Sensor {
    FullFrame,
    ApsC,
}

impl Sensor {
    const ALL: [Self; 2] = [Self::FullFrame, Self::ApsC];

    fn name(self) -> &'static str {
        match self {
            Sensor::FullFrame => "full-frame",
            Sensor::ApsC => "APS-C",
        }
    }

    fn circle_of_confusion_mm(self) -> f64 {
        match self {
            Sensor::FullFrame => 0.03,
            Sensor::ApsC => 0.02,
        }
    }
}

/// Wide-to-normal focal lengths in millimeters.
const FOCAL_LENGTHS_MM: [u32; 5] = [20, 24, 28, 35, 50];

/// Landscape-typical f-numbers.
const F_NUMBERS: [u32; 3] = [8, 11, 16];

/// Accepted error for the answer, in meters.
const TOLERANCE_M: f64 = 0.2;

/// Hyperfocal distance in meters, rounded to one decimal.
///
/// `H = f² / (N·c) + f`, computed in millimeters.
fn hyperfocal_meters(focal_mm: f64, f_number: f64, coc_mm: f64) -> f64 {
    let h_mm = focal_mm * focal_mm / (f_number * coc_mm) + focal_mm;
    (h_mm / 1000.0 * 10.0).round() / 10.0
}

/// Generates a hyperfocal-distance question.
pub fn generate(rng: &mut impl Rng) -> Question {
    loop {
        let Some(&sensor) = Sensor::ALL.choose(rng) else {
            continue;
        };
        let Some(&focal_mm) = FOCAL_LENGTHS_MM.choose(rng) else {
            continue;
        };
        let Some(&f_number) = F_NUMBERS.choose(rng) else {
            continue;
        };

        let coc_mm = sensor.circle_of_confusion_mm();
        let answer_m = hyperfocal_meters(f64::from(focal_mm), f64::from(f_number), coc_mm);

        return Question::new(
            format!(
                "You are using a {} camera with a {focal_mm}mm lens at f/{f_number}. Circle \
                 of confusion c = {coc_mm}mm. Roughly what is the hyperfocal distance H \
                 (in meters, to one decimal)?",
                sensor.name()
            ),
            Answer::DistanceMeters {
                value: answer_m,
                tolerance: TOLERANCE_M,
            },
        )
        .with_correct_note(format!("Exact: {answer_m:.1} m"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn formula_matches_known_values() {
        // 50mm at f/8 on full frame: 2500 / 0.24 + 50 = 10466.7mm.
        assert_eq!(hyperfocal_meters(50.0, 8.0, 0.03), 10.5);
        // Same lens on APS-C sharpens the criterion: 2500 / 0.16 + 50.
        assert_eq!(hyperfocal_meters(50.0, 8.0, 0.02), 15.7);
        // 20mm at f/16 on full frame: 400 / 0.48 + 20 = 853.3mm.
        assert_eq!(hyperfocal_meters(20.0, 16.0, 0.03), 0.9);
    }

    #[test]
    fn answers_accept_the_rounding_tolerance() {
        let question = Question::new(
            "",
            Answer::DistanceMeters {
                value: 10.5,
                tolerance: TOLERANCE_M,
            },
        );
        assert!(question.answer().check("10.5"));
        assert!(question.answer().check("10,4"));
        assert!(question.answer().check("10.7"));
        assert!(!question.answer().check("10.8"));
    }

    #[test]
    fn generated_answers_verify_against_their_own_text() {
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..300 {
            let question = generate(&mut rng);
            let canonical = question.answer().display();
            assert!(question.answer().check(&canonical));
            assert!(question.correct_note().unwrap().starts_with("Exact: "));
        }
    }

    #[test]
    fn prompts_name_the_sensor_and_coc() {
        let mut rng = StdRng::seed_from_u64(1);
        let question = generate(&mut rng);
        let prompt = question.prompt();
        assert!(prompt.contains("Circle of confusion"));
        assert!(prompt.contains("full-frame") || prompt.contains("APS-C"));
    }
}
