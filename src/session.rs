use std::time::Instant;

use crate::challenge::Challenge;
use crate::difficulty::Difficulty;
use crate::metrics::{positional_matches, AttemptResult};

#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

#[derive(Clone, Debug, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Active,
}

/// Per-keystroke view of the current input.
///
/// The cumulative counters add up every input event of the session, so editing a
/// single attempt counts the same characters many times over. They never feed
/// the final [`AttemptResult`].
#[derive(Clone, Debug, Copy, PartialEq, Eq, Default)]
pub struct LiveInputStats {
    pub typed_length: usize,
    pub positional_matches: usize,
    pub cumulative_typed_characters: usize,
    pub cumulative_correct_characters: usize,
}

/// State of one attempt: Idle until started, Active until finished.
#[derive(Debug, Clone, Default)]
pub struct TypingSession {
    pub difficulty: Difficulty,
    pub challenge_text: String,
    pub started_at: Option<Instant>,
    pub state: SessionState,
    pub time_limit_secs: u64,
    pub typed_text: String,
    pub stats: LiveInputStats,
}

impl TypingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    /// Begin a fresh attempt. Valid from any state; everything from a previous
    /// attempt is discarded.
    pub fn start(&mut self, challenge: Challenge, now: Instant) {
        self.difficulty = challenge.difficulty;
        self.time_limit_secs = challenge.difficulty.time_limit_secs();
        self.challenge_text = challenge.text;
        self.typed_text.clear();
        self.stats = LiveInputStats::default();
        self.started_at = Some(now);
        self.state = SessionState::Active;
    }

    /// Record the full current contents of the input. Ignored unless active.
    pub fn on_input_changed(&mut self, typed_text: &str) -> Option<Outcome> {
        if !self.is_active() {
            return None;
        }

        let typed_length = typed_text.chars().count();
        let matches = positional_matches(typed_text, &self.challenge_text);

        self.typed_text = typed_text.to_string();
        self.stats.typed_length = typed_length;
        self.stats.positional_matches = matches;
        self.stats.cumulative_typed_characters += typed_length;
        self.stats.cumulative_correct_characters += matches;

        Some(if matches == typed_length {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        })
    }

    /// Score the current input and go idle. Returns `None` when no attempt is running.
    pub fn finish(&mut self, now: Instant) -> Option<AttemptResult> {
        if !self.is_active() {
            return None;
        }

        let elapsed_millis = self.elapsed_millis(now);
        self.state = SessionState::Idle;

        Some(AttemptResult::score(
            elapsed_millis,
            &self.typed_text,
            &self.challenge_text,
        ))
    }

    /// Show the challenge for the next attempt while idle.
    pub fn set_upcoming_challenge(&mut self, challenge: Challenge) {
        if !self.is_active() {
            self.difficulty = challenge.difficulty;
            self.challenge_text = challenge.text;
        }
    }

    pub fn elapsed_millis(&self, now: Instant) -> u64 {
        self.started_at
            .map(|started| now.saturating_duration_since(started).as_millis() as u64)
            .unwrap_or_default()
    }
}
