use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Challenge tier. Selects both the challenge pool and the time limit.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    ValueEnum,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn time_limit_secs(&self) -> u64 {
        match self {
            Difficulty::Easy => 30,
            Difficulty::Medium => 45,
            Difficulty::Hard => 60,
        }
    }

    /// Parse a user supplied label. Anything unrecognized falls back to Easy.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            other => {
                tracing::warn!(label = other, "unknown difficulty, using easy");
                Difficulty::Easy
            }
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Hard,
            Difficulty::Medium => Difficulty::Easy,
            Difficulty::Hard => Difficulty::Medium,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_limits() {
        assert_eq!(Difficulty::Easy.time_limit_secs(), 30);
        assert_eq!(Difficulty::Medium.time_limit_secs(), 45);
        assert_eq!(Difficulty::Hard.time_limit_secs(), 60);
    }

    #[test]
    fn test_from_label() {
        assert_eq!(Difficulty::from_label("Easy"), Difficulty::Easy);
        assert_eq!(Difficulty::from_label("medium"), Difficulty::Medium);
        assert_eq!(Difficulty::from_label(" HARD "), Difficulty::Hard);
    }

    #[test]
    fn test_from_label_unknown_falls_back_to_easy() {
        let d = Difficulty::from_label("nightmare");
        assert_eq!(d, Difficulty::Easy);
        assert_eq!(d.time_limit_secs(), 30);
    }

    #[test]
    fn test_next_and_previous_cycle() {
        for d in Difficulty::ALL {
            assert_eq!(d.next().previous(), d);
        }
        assert_eq!(Difficulty::Hard.next(), Difficulty::Easy);
        assert_eq!(Difficulty::Easy.previous(), Difficulty::Hard);
    }

    #[test]
    fn test_display() {
        assert_eq!(Difficulty::Medium.to_string(), "Medium");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Difficulty::Hard).unwrap();
        assert_eq!(json, "\"hard\"");
        let d: Difficulty = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(d, Difficulty::Medium);
    }
}
