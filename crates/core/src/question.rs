use std::fmt;

use crate::normalize;
use crate::scales::{Aperture, Iso, ShutterSpeed};

//
// ─── ANSWER ───────────────────────────────────────────────────────────────────
//

/// The expected answer to a question, together with its checking rule.
///
/// Each variant pairs a value with the normalizer and comparison the unit
/// calls for: exact equality for the discrete exposure scales, a rounded
/// integer for percentages, and an absolute tolerance for distances.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Aperture(Aperture),
    Shutter(ShutterSpeed),
    Iso(Iso),
    /// Intensity percentage, matched after rounding the user's value.
    Percent(u32),
    /// A distance in meters within `tolerance` of `value`.
    DistanceMeters { value: f64, tolerance: f64 },
}

impl Answer {
    /// Normalizes `raw` and compares it against the expected value.
    ///
    /// Malformed input is simply a non-match, never an error.
    #[must_use]
    pub fn check(&self, raw: &str) -> bool {
        match self {
            Answer::Aperture(expected) => normalize::aperture(raw)
                .is_ok_and(|user| (user - expected.value()).abs() < 1e-9),
            Answer::Shutter(expected) => {
                normalize::shutter(raw).is_ok_and(|user| user == expected.label())
            }
            Answer::Iso(expected) => {
                normalize::iso(raw).is_ok_and(|user| user == expected.value())
            }
            Answer::Percent(expected) => normalize::percent(raw)
                .is_ok_and(|user| (user.round() - f64::from(*expected)).abs() < 0.5),
            Answer::DistanceMeters { value, tolerance } => {
                // Pad the boundary so exact inputs like 4.2 vs 4.0 are not
                // rejected over float representation (4.2 - 4.0 > 0.2 in f64).
                normalize::distance(raw).is_ok_and(|user| (user - value).abs() <= *tolerance + 1e-9)
            }
        }
    }

    /// The correct-answer text shown in feedback, e.g. `f/5.6` or `4 m`.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Answer::Aperture(aperture) => aperture.to_string(),
            Answer::Shutter(shutter) => shutter.label().to_string(),
            Answer::Iso(iso) => iso.to_string(),
            Answer::Percent(percent) => format!("{percent}%"),
            Answer::DistanceMeters { value, .. } => format!("{} m", format_compact(*value)),
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Formats a number with at most one decimal, trimming a trailing `.0`.
#[must_use]
pub fn format_compact(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// A single generated quiz round: prompt text plus the expected answer.
///
/// Ephemeral by design; a fresh question replaces it every round and nothing
/// is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    prompt: String,
    answer: Answer,
    correct_note: Option<String>,
}

impl Question {
    #[must_use]
    pub fn new(prompt: impl Into<String>, answer: Answer) -> Self {
        Self {
            prompt: prompt.into(),
            answer,
            correct_note: None,
        }
    }

    /// Attaches extra text shown alongside correct feedback, e.g. the exact
    /// unrounded value.
    #[must_use]
    pub fn with_correct_note(mut self, note: impl Into<String>) -> Self {
        self.correct_note = Some(note.into());
        self
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn answer(&self) -> &Answer {
        &self.answer
    }

    #[must_use]
    pub fn correct_note(&self) -> Option<&str> {
        self.correct_note.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aperture(index: usize) -> Aperture {
        Aperture::from_index(index).unwrap()
    }

    #[test]
    fn aperture_answer_checks_normalized_forms() {
        let answer = Answer::Aperture(aperture(4));
        assert!(answer.check("5.6"));
        assert!(answer.check("f/5.6"));
        assert!(answer.check(" F5,6 "));
        assert!(!answer.check("5.7"));
        assert!(!answer.check("narrow"));
        assert_eq!(answer.display(), "f/5.6");
    }

    #[test]
    fn shutter_answer_uses_canonical_text() {
        let answer = Answer::Shutter(ShutterSpeed::from_index(7).unwrap());
        assert!(answer.check("1/125"));
        assert!(answer.check(" 1/125 s"));
        assert!(!answer.check("1/250"));
        assert_eq!(answer.display(), "1/125");

        let one_second = Answer::Shutter(ShutterSpeed::from_index(0).unwrap());
        assert!(one_second.check("1"));
        assert!(one_second.check("1.0"));
        assert!(one_second.check("1\""));
    }

    #[test]
    fn iso_answer_is_exact() {
        let answer = Answer::Iso(Iso::from_index(4).unwrap());
        assert!(answer.check("800"));
        assert!(answer.check("ISO 800"));
        assert!(!answer.check("1600"));
        assert_eq!(answer.display(), "ISO 800");
    }

    #[test]
    fn percent_answer_rounds_user_input() {
        let answer = Answer::Percent(25);
        assert!(answer.check("25"));
        assert!(answer.check("25%"));
        assert!(answer.check("0.25"));
        assert!(answer.check("1/4"));
        assert!(answer.check("25.4"));
        assert!(!answer.check("26"));
        assert!(!answer.check("a quarter"));
        assert_eq!(answer.display(), "25%");
    }

    #[test]
    fn distance_answer_applies_tolerance() {
        let answer = Answer::DistanceMeters {
            value: 4.0,
            tolerance: 0.2,
        };
        assert!(answer.check("4"));
        assert!(answer.check("4.2 m"));
        assert!(answer.check("3,8"));
        assert!(!answer.check("4.21"));
        assert_eq!(answer.display(), "4 m");

        // Boundary inputs hold regardless of how the difference rounds in f64.
        for (value, boundary) in [(4.0, "4.2"), (9.0, "9.2"), (10.5, "10.7"), (10.5, "10.3")] {
            let answer = Answer::DistanceMeters {
                value,
                tolerance: 0.2,
            };
            assert!(answer.check(boundary), "value {value}, input {boundary}");
        }

        let exact = Answer::DistanceMeters {
            value: 7.0,
            tolerance: 1e-9,
        };
        assert!(exact.check("7"));
        assert!(!exact.check("7.1"));
    }

    #[test]
    fn format_compact_trims_trailing_zero() {
        assert_eq!(format_compact(10.0), "10");
        assert_eq!(format_compact(10.47), "10.5");
        assert_eq!(format_compact(22.4), "22.4");
    }

    #[test]
    fn question_carries_optional_note() {
        let question = Question::new("prompt", Answer::Percent(25));
        assert!(question.correct_note().is_none());
        let question = question.with_correct_note("Exact: 10.5 m");
        assert_eq!(question.correct_note(), Some("Exact: 10.5 m"));
        assert_eq!(question.prompt(), "prompt");
    }
}
