use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;

use crate::clock::Clock;
use crate::error::Result;
use crate::runtime::TrainerEvent;
use crate::trainer::{Command, Trainer};

/// Terminal shell state: the trainer plus the text field the user edits.
///
/// Every edit of the field is forwarded to the trainer as the full field contents.
/// The field keeps the submitted attempt until the next start; edits made while
/// no session runs change only the field.
#[derive(Debug)]
pub struct App<C: Clock, R: Rng> {
    pub trainer: Trainer<C, R>,
    pub input: String,
    pub should_quit: bool,
}

impl<C: Clock, R: Rng> App<C, R> {
    pub fn new(trainer: Trainer<C, R>) -> Self {
        Self {
            trainer,
            input: String::new(),
            should_quit: false,
        }
    }

    pub fn on_event(&mut self, event: TrainerEvent) -> Result<()> {
        match event {
            TrainerEvent::Tick => {
                self.trainer.handle(Command::Tick)?;
            }
            TrainerEvent::Resize => {}
            TrainerEvent::Closed => {
                tracing::warn!("input source closed, quitting");
                self.should_quit = true;
            }
            TrainerEvent::Key(key) => self.on_key(key)?,
        }
        Ok(())
    }

    pub fn on_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('l') if ctrl => {
                self.trainer.handle(Command::ClearRecords)?;
                self.input.clear();
            }
            KeyCode::Tab => {
                let difficulty = self.trainer.selected_difficulty();
                self.trainer.handle(Command::Start(difficulty))?;
                self.input.clear();
            }
            KeyCode::Enter => {
                self.trainer.handle(Command::Submit)?;
            }
            KeyCode::Up => {
                let difficulty = self.trainer.selected_difficulty().previous();
                self.trainer.handle(Command::SelectDifficulty(difficulty))?;
            }
            KeyCode::Down => {
                let difficulty = self.trainer.selected_difficulty().next();
                self.trainer.handle(Command::SelectDifficulty(difficulty))?;
            }
            KeyCode::Backspace => {
                if self.input.pop().is_some() {
                    self.trainer.handle(Command::Input(self.input.clone()))?;
                }
            }
            KeyCode::Char(c) if !ctrl => {
                self.input.push(c);
                self.trainer.handle(Command::Input(self.input.clone()))?;
            }
            _ => {}
        }
        Ok(())
    }
}
