use include_dir::{include_dir, Dir};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::difficulty::Difficulty;
use crate::error::{Result, TrainerError};

static CHALLENGE_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/challenges");
const BUILTIN_POOLS_FILE: &str = "pools.json";

/// A text the user has to reproduce during one attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    pub difficulty: Difficulty,
    pub text: String,
}

/// Challenge texts grouped by tier, as stored in the embedded pools file and in config files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengePools {
    pub easy: Vec<String>,
    pub medium: Vec<String>,
    pub hard: Vec<String>,
}

impl ChallengePools {
    pub fn builtin() -> Result<Self> {
        let file = CHALLENGE_DIR
            .get_file(BUILTIN_POOLS_FILE)
            .ok_or_else(|| TrainerError::MissingResource(BUILTIN_POOLS_FILE.to_string()))?;

        let contents = file
            .contents_utf8()
            .ok_or_else(|| TrainerError::MissingResource(BUILTIN_POOLS_FILE.to_string()))?;

        Ok(serde_json::from_str(contents)?)
    }

    pub fn get(&self, difficulty: Difficulty) -> &[String] {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChallengeBank {
    pools: ChallengePools,
}

impl ChallengeBank {
    /// Build a bank, rejecting any tier without texts.
    pub fn new(pools: ChallengePools) -> Result<Self> {
        let bank = Self { pools };
        bank.validate()?;
        Ok(bank)
    }

    pub fn builtin() -> Result<Self> {
        Self::new(ChallengePools::builtin()?)
    }

    pub fn validate(&self) -> Result<()> {
        match Difficulty::ALL
            .into_iter()
            .find(|d| self.pools.get(*d).is_empty())
        {
            Some(difficulty) => Err(TrainerError::EmptyPool { difficulty }),
            None => Ok(()),
        }
    }

    pub fn pools(&self) -> &ChallengePools {
        &self.pools
    }

    /// Uniform choice from the tier's pool. The same text may come up twice in a row.
    pub fn pick<R: Rng + ?Sized>(&self, difficulty: Difficulty, rng: &mut R) -> Result<Challenge> {
        let pool = self.pools.get(difficulty);
        if pool.is_empty() {
            return Err(TrainerError::EmptyPool { difficulty });
        }

        let text = pool[rng.gen_range(0..pool.len())].clone();
        Ok(Challenge { difficulty, text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rand::{rngs::StdRng, SeedableRng};

    fn pools(easy: &[&str], medium: &[&str], hard: &[&str]) -> ChallengePools {
        let owned = |v: &[&str]| v.iter().map(|s| s.to_string()).collect();
        ChallengePools {
            easy: owned(easy),
            medium: owned(medium),
            hard: owned(hard),
        }
    }

    #[test]
    fn test_builtin_pools_have_four_per_tier() {
        let pools = ChallengePools::builtin().unwrap();
        for d in Difficulty::ALL {
            assert_eq!(pools.get(d).len(), 4);
        }
        assert!(pools
            .easy
            .contains(&"Practice makes perfect.".to_string()));
    }

    #[test]
    fn test_builtin_bank_is_valid() {
        assert!(ChallengeBank::builtin().is_ok());
    }

    #[test]
    fn test_empty_pool_is_rejected() {
        let result = ChallengeBank::new(pools(&["a"], &[], &["c"]));
        assert_matches!(
            result,
            Err(TrainerError::EmptyPool {
                difficulty: Difficulty::Medium
            })
        );
    }

    #[test]
    fn test_pick_returns_member_of_requested_tier() {
        let bank = ChallengeBank::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for d in Difficulty::ALL {
            for _ in 0..20 {
                let challenge = bank.pick(d, &mut rng).unwrap();
                assert_eq!(challenge.difficulty, d);
                assert!(bank.pools().get(d).contains(&challenge.text));
            }
        }
    }

    #[test]
    fn test_pick_single_entry_pool() {
        let bank = ChallengeBank::new(pools(&["cat"], &["dog"], &["emu"])).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(bank.pick(Difficulty::Easy, &mut rng).unwrap().text, "cat");
        assert_eq!(bank.pick(Difficulty::Hard, &mut rng).unwrap().text, "emu");
    }

    #[test]
    fn test_pick_is_reproducible_with_same_seed() {
        let bank = ChallengeBank::builtin().unwrap();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);

        for _ in 0..10 {
            assert_eq!(
                bank.pick(Difficulty::Medium, &mut a).unwrap(),
                bank.pick(Difficulty::Medium, &mut b).unwrap()
            );
        }
    }

    #[test]
    fn test_pick_covers_whole_pool() {
        let bank = ChallengeBank::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..200 {
            seen.insert(bank.pick(Difficulty::Hard, &mut rng).unwrap().text);
        }

        assert_eq!(seen.len(), 4);
    }
}
