use thiserror::Error;

use crate::difficulty::Difficulty;

#[derive(Error, Debug)]
pub enum TrainerError {
    /// A difficulty tier has no challenge texts. Raised while validating pools at startup.
    #[error("challenge pool for {difficulty} difficulty is empty")]
    EmptyPool { difficulty: Difficulty },

    #[error("embedded resource not found: {0}")]
    MissingResource(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TrainerError>;
