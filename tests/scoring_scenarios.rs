use std::time::Duration;

use approx::assert_abs_diff_eq;
use assert_matches::assert_matches;
use keysprint::challenge::{ChallengeBank, ChallengePools};
use keysprint::clock::ManualClock;
use keysprint::feedback::Feedback;
use keysprint::records::RecordState;
use keysprint::session::Outcome;
use keysprint::{Command, Difficulty, Trainer};
use rand::{rngs::StdRng, SeedableRng};

fn builtin_trainer(seed: u64) -> (Trainer<ManualClock, StdRng>, ManualClock) {
    let clock = ManualClock::new();
    let trainer = Trainer::new(
        ChallengeBank::builtin().unwrap(),
        clock.clone(),
        StdRng::seed_from_u64(seed),
    )
    .unwrap();
    (trainer, clock)
}

#[test]
fn typing_the_challenge_exactly_is_fully_accurate() {
    let (mut trainer, clock) = builtin_trainer(1);

    for d in Difficulty::ALL {
        trainer.start_session(d).unwrap();
        let text = trainer.challenge_text().to_string();

        let mut typed = String::new();
        for c in text.chars() {
            typed.push(c);
            assert_eq!(trainer.submit_input(&typed), Some(Outcome::Correct));
        }

        clock.advance(Duration::from_millis(12_345));
        let result = trainer.submit_attempt().unwrap().unwrap();
        assert_abs_diff_eq!(result.accuracy_percent, 100.0, epsilon = 1e-9);
        assert_eq!(result.total_characters, text.chars().count());
    }
}

#[test]
fn pools_match_difficulty() {
    let (mut trainer, _) = builtin_trainer(2);
    let pools = ChallengePools::builtin().unwrap();

    for d in Difficulty::ALL {
        for _ in 0..10 {
            trainer.start_session(d).unwrap();
            assert!(pools.get(d).iter().any(|t| t == trainer.challenge_text()));
        }
    }
}

#[test]
fn increasing_speed_keeps_setting_records() {
    let (mut trainer, clock) = builtin_trainer(3);
    let mut seconds = 60;

    for attempt in 0..5 {
        trainer.start_session(Difficulty::Easy).unwrap();
        let text = trainer.challenge_text().to_string();
        // ten characters each time, in less time on every attempt
        trainer.submit_input(&text[..10]);
        clock.advance(Duration::from_secs(seconds));
        trainer.submit_attempt().unwrap();

        assert_eq!(
            trainer.feedback(),
            Some(Feedback::NewRecord),
            "attempt {attempt} should be a record"
        );
        seconds -= 10;
    }
}

#[test]
fn slower_attempt_gets_regular_feedback() {
    let (mut trainer, clock) = builtin_trainer(4);

    trainer.start_session(Difficulty::Easy).unwrap();
    let text = trainer.challenge_text().to_string();
    trainer.submit_input(&text);
    clock.advance(Duration::from_secs(5));
    trainer.submit_attempt().unwrap();
    let best = trainer.records();

    // ten correct characters in a minute: accurate but slow
    trainer.start_session(Difficulty::Easy).unwrap();
    let text = trainer.challenge_text().to_string();
    trainer.submit_input(&text[..10]);
    clock.advance(Duration::from_secs(60));
    trainer.submit_attempt().unwrap();

    assert_eq!(trainer.records(), best);
    assert_eq!(trainer.feedback(), Some(Feedback::SlowSpeed));
}

#[test]
fn clear_records_always_returns_to_zero() {
    let (mut trainer, clock) = builtin_trainer(5);
    trainer.handle(Command::Start(Difficulty::Hard)).unwrap();
    let text = trainer.challenge_text().to_string();
    trainer.handle(Command::Input(text)).unwrap();
    clock.advance(Duration::from_secs(3));
    trainer.handle(Command::Submit).unwrap();

    trainer.handle(Command::ClearRecords).unwrap();

    assert_eq!(trainer.records(), RecordState::default());
    assert!(trainer.is_active());
}

#[test]
fn stray_events_after_timeout_are_ignored() {
    let (mut trainer, clock) = builtin_trainer(6);
    trainer.start_session(Difficulty::Medium).unwrap();
    clock.advance(Duration::from_secs(45));
    assert_matches!(trainer.tick(), Ok(Some(_)));

    let records = trainer.records();
    assert_eq!(trainer.submit_input("late keystroke"), None);
    assert_matches!(trainer.submit_attempt(), Ok(None));
    assert_matches!(trainer.tick(), Ok(None));
    assert_eq!(trainer.records(), records);
}
