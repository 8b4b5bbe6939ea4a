use crate::core::game::{Control, Game};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use std::time::Duration;
use tracing::debug;

const FRAME: Duration = Duration::from_millis(16);

pub struct Engine<G: Game> {
    game: G,
}

impl<G: Game> Engine<G> {
    pub fn new(game: G) -> Self {
        Self { game }
    }

    /// Run until the player quits, then hand the game back
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<G> {
        loop {
            terminal.draw(|f| self.game.render(f))?;

            // INPUT (Non-blocking)
            if event::poll(Duration::ZERO)? {
                if let Event::Key(key) = event::read()? {
                    // Windows reports releases too
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    let ctrl_c = key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL);
                    if key.code == KeyCode::Esc || ctrl_c {
                        debug!("quit requested");
                        break;
                    }
                    if self.game.handle_input(key) == Control::Quit {
                        break;
                    }
                }
            }

            tokio::time::sleep(FRAME).await;
        }

        Ok(self.game)
    }
}
