/// Running correct/wrong counters for one quiz session.
///
/// Process-local: created alongside the drill view and reset only when the
/// app restarts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreTally {
    correct: u32,
    wrong: u32,
}

impl ScoreTally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_correct(&mut self) {
        self.correct = self.correct.saturating_add(1);
    }

    pub fn record_wrong(&mut self) {
        self.wrong = self.wrong.saturating_add(1);
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn wrong(&self) -> u32 {
        self.wrong
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.correct.saturating_add(self.wrong)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_counts_each_outcome_once() {
        let mut tally = ScoreTally::new();
        assert_eq!(tally.total(), 0);

        tally.record_correct();
        tally.record_correct();
        tally.record_wrong();

        assert_eq!(tally.correct(), 2);
        assert_eq!(tally.wrong(), 1);
        assert_eq!(tally.total(), 3);
    }
}
