mod ui;

use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use keysprint::{
    app::App,
    app_dirs::AppDirs,
    clock::SystemClock,
    config::{Config, ConfigStore, FileConfigStore},
    logging,
    runtime::{CrosstermEventSource, FixedTicker, Runner},
    Difficulty, Trainer,
};
use rand::{rngs::StdRng, SeedableRng};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
};

/// timed typing trainer with difficulty tiers, live accuracy feedback, and best-score records
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A timed typing trainer: pick a difficulty, press Tab to get a challenge, type it and press Enter. Speed is reported in characters and words per minute, and the best speeds of the session are kept as records."
)]
pub struct Cli {
    /// difficulty preselected at launch (overrides the config file)
    #[clap(short = 'd', long, value_enum)]
    difficulty: Option<Difficulty>,

    /// seed for challenge selection, for reproducible runs
    #[clap(short = 's', long)]
    seed: Option<u64>,

    /// read settings from this config file instead of the default location
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// write a default config, including the built-in challenges, to this path and exit
    #[clap(long, value_name = "PATH")]
    init_config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if let Some(path) = &cli.init_config {
        FileConfigStore::with_path(path).save(&Config::with_builtin_challenges()?)?;
        println!("wrote default config to {}", path.display());
        return Ok(());
    }

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    logging::init(&AppDirs::log_path())?;

    let store = cli
        .config
        .as_ref()
        .map(FileConfigStore::with_path)
        .unwrap_or_default();
    let config = store.load();

    // an empty challenge tier is fatal, before the terminal is touched
    let bank = config.challenge_bank()?;
    let rng = match cli.seed.or(config.seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut trainer = Trainer::new(bank, SystemClock, rng)?;
    trainer.select_difficulty(cli.difficulty.unwrap_or_else(|| config.difficulty()));
    tracing::info!(config = %store.path().display(), "keysprint starting");

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(trainer);
    let result = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref err) = result {
        tracing::error!(%err, "trainer stopped");
    }
    result
}

fn start_tui<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App<SystemClock, StdRng>,
) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(CrosstermEventSource::new(), FixedTicker::default());

    while !app.should_quit {
        terminal.draw(|f| ui::draw(app, f))?;
        app.on_event(runner.step())?;
    }

    Ok(())
}
