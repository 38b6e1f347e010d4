use rand::Rng;

use photo_core::question::Question;
use photo_core::tally::ScoreTally;

use crate::drills;

//
// ─── DRILL KIND ───────────────────────────────────────────────────────────────
//

/// The four independent drills.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DrillKind {
    Exposure,
    Flash,
    InverseSquare,
    Hyperfocal,
}

impl DrillKind {
    pub const ALL: [Self; 4] = [
        Self::Exposure,
        Self::Flash,
        Self::InverseSquare,
        Self::Hyperfocal,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            DrillKind::Exposure => "Exposure Triangle",
            DrillKind::Flash => "Flash Guide Number",
            DrillKind::InverseSquare => "Inverse-Square Law",
            DrillKind::Hyperfocal => "Hyperfocal Distance",
        }
    }

    /// One-line description shown under the drill title.
    #[must_use]
    pub fn blurb(self) -> &'static str {
        match self {
            DrillKind::Exposure => {
                "Keep the exposure constant while one setting changes: trade stops between \
                 ISO, shutter speed, and aperture."
            }
            DrillKind::Flash => {
                "Work with the flash guide number: GN = aperture × distance at ISO 100."
            }
            DrillKind::InverseSquare => {
                "Estimate how light falls off with distance: intensity follows 1/distance²."
            }
            DrillKind::Hyperfocal => {
                "Compute the hyperfocal distance from focal length, aperture, and circle of \
                 confusion."
            }
        }
    }

    /// Input placeholder hinting at the expected answer format.
    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            DrillKind::Exposure => "e.g. f/5.6, 1/125, or 800",
            DrillKind::Flash => "e.g. f/8 or 5",
            DrillKind::InverseSquare => "e.g. 25%, 1/4, or 4",
            DrillKind::Hyperfocal => "e.g. 10.5",
        }
    }

    /// Method reminder shown after a wrong answer.
    #[must_use]
    pub fn explanation(self) -> &'static str {
        match self {
            DrillKind::Exposure => {
                "Count how many stops the changed settings moved, then move the remaining \
                 setting the same number of stops in the opposite direction."
            }
            DrillKind::Flash => {
                "Use GN = distance × aperture and solve for the unknown: GN divided by the \
                 distance, or GN divided by the aperture."
            }
            DrillKind::InverseSquare => {
                "Light intensity follows I ∝ 1/distance². Making the distance n times larger \
                 leaves 1/n² of the original intensity."
            }
            DrillKind::Hyperfocal => {
                "Use H ≈ f² / (N × c) + f in millimeters, then divide by 1000 to get meters."
            }
        }
    }

    /// Generates a fresh question for this drill.
    #[must_use]
    pub fn generate(self, rng: &mut impl Rng) -> Question {
        match self {
            DrillKind::Exposure => drills::exposure::generate(rng),
            DrillKind::Flash => drills::flash::generate(rng),
            DrillKind::InverseSquare => drills::inverse_square::generate(rng),
            DrillKind::Hyperfocal => drills::hyperfocal::generate(rng),
        }
    }
}

//
// ─── SUBMIT OUTCOME ───────────────────────────────────────────────────────────
//

/// What a call to [`DrillSession::submit`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input while a question is open; nothing changed.
    Ignored,
    /// Feedback was showing; a fresh question replaced it.
    Advanced,
    Correct {
        /// Extra detail for the feedback line, e.g. the exact value.
        note: Option<String>,
    },
    Wrong {
        /// Display text of the correct answer.
        correct: String,
        /// Method reminder for this drill.
        explanation: &'static str,
    },
}

//
// ─── DRILL SESSION ────────────────────────────────────────────────────────────
//

/// State for one open drill page: the current question, the running tally,
/// and the two-phase submit loop.
///
/// The first submit checks the answer and shows feedback; the next submit
/// (whatever its input) advances to a fresh question.
#[derive(Clone, Debug, PartialEq)]
pub struct DrillSession {
    kind: DrillKind,
    question: Question,
    tally: ScoreTally,
    awaiting_next: bool,
}

impl DrillSession {
    #[must_use]
    pub fn new(kind: DrillKind) -> Self {
        Self::with_rng(kind, &mut rand::rng())
    }

    /// Builds a session with a caller-provided RNG, for deterministic tests.
    #[must_use]
    pub fn with_rng(kind: DrillKind, rng: &mut impl Rng) -> Self {
        Self {
            kind,
            question: kind.generate(rng),
            tally: ScoreTally::new(),
            awaiting_next: false,
        }
    }

    pub fn submit(&mut self, raw: &str) -> SubmitOutcome {
        self.submit_with_rng(raw, &mut rand::rng())
    }

    /// Submit variant with a caller-provided RNG, for deterministic tests.
    pub fn submit_with_rng(&mut self, raw: &str, rng: &mut impl Rng) -> SubmitOutcome {
        if self.awaiting_next {
            self.question = self.kind.generate(rng);
            self.awaiting_next = false;
            return SubmitOutcome::Advanced;
        }

        if raw.trim().is_empty() {
            return SubmitOutcome::Ignored;
        }

        self.awaiting_next = true;
        if self.question.answer().check(raw) {
            self.tally.record_correct();
            SubmitOutcome::Correct {
                note: self.question.correct_note().map(str::to_string),
            }
        } else {
            self.tally.record_wrong();
            SubmitOutcome::Wrong {
                correct: self.question.answer().display(),
                explanation: self.kind.explanation(),
            }
        }
    }

    #[must_use]
    pub fn kind(&self) -> DrillKind {
        self.kind
    }

    #[must_use]
    pub fn question(&self) -> &Question {
        &self.question
    }

    #[must_use]
    pub fn tally(&self) -> &ScoreTally {
        &self.tally
    }

    /// True while feedback is showing and the next submit advances.
    #[must_use]
    pub fn awaiting_next(&self) -> bool {
        self.awaiting_next
    }
}
