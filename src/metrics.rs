use std::fmt::{self, Display, Formatter};

use crate::util::format_decimal;

pub const CHARS_PER_WORD: f64 = 5.0;
const MILLIS_PER_MINUTE: f64 = 60_000.0;

/// Number of positions where `typed` and `target` hold the same character,
/// over the overlapping length of the two.
pub fn positional_matches(typed: &str, target: &str) -> usize {
    typed
        .chars()
        .zip(target.chars())
        .filter(|(t, e)| t == e)
        .count()
}

/// Snapshot of a completed attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttemptResult {
    pub elapsed_millis: u64,
    pub total_characters: usize,
    pub correct_characters: usize,
    pub cpm: f64,
    pub wpm: f64,
    pub accuracy_percent: f64,
}

impl AttemptResult {
    /// Empty submissions score zero on every metric, and so does speed when no
    /// time has elapsed.
    pub fn from_counts(elapsed_millis: u64, total_characters: usize, correct_characters: usize) -> Self {
        let minutes = elapsed_millis as f64 / MILLIS_PER_MINUTE;
        let total = total_characters as f64;

        let (cpm, wpm) = if total_characters == 0 || elapsed_millis == 0 {
            (0.0, 0.0)
        } else {
            (total / minutes, (total / CHARS_PER_WORD) / minutes)
        };

        let accuracy_percent = if total_characters == 0 {
            0.0
        } else {
            (correct_characters as f64 / total) * 100.0
        };

        Self {
            elapsed_millis,
            total_characters,
            correct_characters,
            cpm,
            wpm,
            accuracy_percent,
        }
    }

    pub fn score(elapsed_millis: u64, typed: &str, target: &str) -> Self {
        Self::from_counts(
            elapsed_millis,
            typed.chars().count(),
            positional_matches(typed, target),
        )
    }
}

impl Display for AttemptResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Your typing speed: {} CPM / {} WPM",
            format_decimal(self.cpm),
            format_decimal(self.wpm)
        )
    }
}
