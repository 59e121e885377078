use rand::Rng;

use crate::challenge::ChallengeBank;
use crate::clock::{Clock, SessionClock};
use crate::difficulty::Difficulty;
use crate::error::Result;
use crate::feedback::{Feedback, FeedbackAdvisor};
use crate::metrics::AttemptResult;
use crate::records::{RecordState, RecordTracker};
use crate::session::{LiveInputStats, Outcome, TypingSession};

/// Discrete events the shell feeds into the trainer, one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SelectDifficulty(Difficulty),
    Start(Difficulty),
    Input(String),
    Submit,
    Tick,
    ClearRecords,
}

/// Owns all core state. The shell reads it through the query methods and
/// changes it only through the operations below.
#[derive(Debug)]
pub struct Trainer<C: Clock, R: Rng> {
    bank: ChallengeBank,
    clock: C,
    rng: R,
    difficulty: Difficulty,
    session: TypingSession,
    session_clock: SessionClock,
    records: RecordTracker,
    advisor: FeedbackAdvisor,
    last_result: Option<AttemptResult>,
    feedback: Option<Feedback>,
    last_outcome: Option<Outcome>,
}

impl<C: Clock, R: Rng> Trainer<C, R> {
    pub fn new(bank: ChallengeBank, clock: C, rng: R) -> Result<Self> {
        bank.validate()?;

        Ok(Self {
            bank,
            clock,
            rng,
            difficulty: Difficulty::default(),
            session: TypingSession::new(),
            session_clock: SessionClock::new(),
            records: RecordTracker::new(),
            advisor: FeedbackAdvisor,
            last_result: None,
            feedback: None,
            last_outcome: None,
        })
    }

    /// Apply one event. Returns the attempt result if the event completed an attempt.
    pub fn handle(&mut self, command: Command) -> Result<Option<AttemptResult>> {
        match command {
            Command::SelectDifficulty(difficulty) => {
                self.select_difficulty(difficulty);
                Ok(None)
            }
            Command::Start(difficulty) => self.start_session(difficulty).map(|_| None),
            Command::Input(text) => {
                self.submit_input(&text);
                Ok(None)
            }
            Command::Submit => self.submit_attempt(),
            Command::Tick => self.tick(),
            Command::ClearRecords => self.clear_records().map(|_| None),
        }
    }

    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn start_session(&mut self, difficulty: Difficulty) -> Result<()> {
        self.difficulty = difficulty;
        let challenge = self.bank.pick(difficulty, &mut self.rng)?;
        let now = self.clock.now();

        self.session.start(challenge, now);
        self.session_clock.start(now, self.session.time_limit_secs);
        self.feedback = None;
        self.last_outcome = None;

        tracing::info!(
            %difficulty,
            time_limit_secs = self.session.time_limit_secs,
            challenge = %self.session.challenge_text,
            "session started"
        );
        Ok(())
    }

    /// Forward the full contents of the input field. Ignored unless a session is active.
    pub fn submit_input(&mut self, text: &str) -> Option<Outcome> {
        let outcome = self.session.on_input_changed(text);
        if outcome.is_some() {
            self.last_outcome = outcome;
        } else {
            tracing::trace!("input ignored, no active session");
        }
        outcome
    }

    /// Complete the running attempt. A second call is a no-op.
    pub fn submit_attempt(&mut self) -> Result<Option<AttemptResult>> {
        self.complete()
    }

    /// Periodic clock event; completes the attempt once its time limit is reached.
    pub fn tick(&mut self) -> Result<Option<AttemptResult>> {
        match self.session_clock.tick(self.clock.now()) {
            Some(tick) if tick.expired && self.session.is_active() => {
                tracing::debug!(elapsed_secs = tick.elapsed_secs, "time limit reached");
                self.complete()
            }
            _ => Ok(None),
        }
    }

    /// Restart with the selected difficulty and forget the records.
    pub fn clear_records(&mut self) -> Result<()> {
        self.start_session(self.difficulty)?;
        self.records.reset();
        self.feedback = None;
        tracing::info!("records cleared");
        Ok(())
    }

    fn complete(&mut self) -> Result<Option<AttemptResult>> {
        let Some(result) = self.session.finish(self.clock.now()) else {
            return Ok(None);
        };
        self.session_clock.stop();

        let flags = self.records.update(&result);
        self.feedback = self.advisor.advise(&result, flags);
        self.last_result = Some(result);

        tracing::info!(
            elapsed_millis = result.elapsed_millis,
            cpm = result.cpm,
            wpm = result.wpm,
            accuracy = result.accuracy_percent,
            new_cpm_record = flags.new_cpm_record,
            new_wpm_record = flags.new_wpm_record,
            "attempt finished"
        );

        let next = self.bank.pick(self.difficulty, &mut self.rng)?;
        self.session.set_upcoming_challenge(next);

        Ok(Some(result))
    }

    pub fn is_active(&self) -> bool {
        self.session.is_active()
    }

    pub fn selected_difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn session(&self) -> &TypingSession {
        &self.session
    }

    pub fn challenge_text(&self) -> &str {
        &self.session.challenge_text
    }

    pub fn typed_text(&self) -> &str {
        &self.session.typed_text
    }

    pub fn time_limit_secs(&self) -> u64 {
        self.session_clock.time_limit_secs()
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.session_clock.elapsed_secs()
    }

    pub fn remaining_secs(&self) -> u64 {
        self.session_clock.remaining_secs()
    }

    pub fn live_stats(&self) -> LiveInputStats {
        self.session.stats
    }

    pub fn records(&self) -> RecordState {
        self.records.state()
    }

    pub fn last_result(&self) -> Option<&AttemptResult> {
        self.last_result.as_ref()
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }
}
