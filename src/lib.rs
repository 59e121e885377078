// Library surface for the trainer core, shared by the binary and the integration tests.
// Rendering stays in the binary.
pub mod app;
pub mod app_dirs;
pub mod challenge;
pub mod clock;
pub mod config;
pub mod difficulty;
pub mod error;
pub mod feedback;
pub mod logging;
pub mod metrics;
pub mod records;
pub mod runtime;
pub mod session;
pub mod trainer;
pub mod util;

pub use difficulty::Difficulty;
pub use error::{Result, TrainerError};
pub use trainer::{Command, Trainer};
