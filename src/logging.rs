use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::Result;

/// Environment variable holding the log filter, e.g. `KEYSPRINT_LOG=keysprint=debug`.
pub const LOG_ENV: &str = "KEYSPRINT_LOG";
const DEFAULT_FILTER: &str = "keysprint=info";

/// Send tracing output to `path`. The terminal belongs to the UI, so nothing is
/// written to stdout or stderr.
pub fn init(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // a second init in the same process keeps the first subscriber
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
    {
        tracing::debug!(%err, path = %path.display(), "tracing subscriber already installed");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn init_creates_log_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logs").join("keysprint.log");

        init(&path).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn second_init_is_not_an_error() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("first.log");
        let second = dir.path().join("second.log");

        init(&first).unwrap();
        init(&second).unwrap();

        assert!(second.exists());
    }
}
