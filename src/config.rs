use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app_dirs::AppDirs;
use crate::challenge::{ChallengeBank, ChallengePools};
use crate::difficulty::Difficulty;
use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Difficulty preselected at launch. Unknown labels mean easy.
    pub difficulty: String,
    /// Fixed seed for challenge selection.
    pub seed: Option<u64>,
    /// Replaces the built-in challenge texts when present.
    pub challenges: Option<ChallengePools>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            difficulty: "easy".to_string(),
            seed: None,
            challenges: None,
        }
    }
}

impl Config {
    pub fn difficulty(&self) -> Difficulty {
        Difficulty::from_label(&self.difficulty)
    }

    /// Challenge bank for this config. Empty custom tiers are rejected here.
    pub fn challenge_bank(&self) -> Result<ChallengeBank> {
        match &self.challenges {
            Some(pools) => ChallengeBank::new(pools.clone()),
            None => ChallengeBank::builtin(),
        }
    }

    /// Default config spelling out the built-in challenges, as a starting point for edits.
    pub fn with_builtin_challenges() -> Result<Self> {
        Ok(Self {
            challenges: Some(ChallengePools::builtin()?),
            ..Self::default()
        })
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            path: AppDirs::config_path(),
        }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(_) => {
                tracing::debug!(path = %self.path.display(), "no config file, using defaults");
                return Config::default();
            }
        };

        match serde_json::from_slice::<Config>(&bytes) {
            Ok(cfg) => cfg,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "unreadable config, using defaults");
                Config::default()
            }
        }
    }

    fn save(&self, cfg: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}
