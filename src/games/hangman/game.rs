use crossterm::event::{KeyCode, KeyEvent};
use tracing::{debug, info};

use crate::core::game::{Control, Game};
use crate::games::hangman::renderer;
use crate::games::hangman::round::{Round, RoundStatus};
use crate::words::{Category, WordRepository};

/// Which view is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Categories { selected: usize },
    Playing,
}

/// Rounds won and lost in this session. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub wins: u32,
    pub losses: u32,
}

/// A hangman session: the injected word repository plus the active round
pub struct HangmanGame {
    words: WordRepository,
    round: Round,
    screen: Screen,
    score: Score,
}

impl HangmanGame {
    /// Starts on the category screen with no round in progress
    pub fn new(words: WordRepository) -> Self {
        Self {
            words,
            round: Round::default(),
            screen: Screen::Categories { selected: 0 },
            score: Score::default(),
        }
    }

    /// New round with a word from the current category
    pub fn start_new_game(&mut self) {
        let word = self.words.random_word();
        debug!(letters = word.chars().filter(|c| *c != ' ').count(), "new round");
        self.round.start_new_game(&word);
        self.screen = Screen::Playing;
    }

    /// Switch to `category` and start a round in it. An unknown name keeps
    /// the current category; returns whether the switch happened.
    pub fn start_new_game_in(&mut self, category: &str) -> bool {
        let found = self.words.set_current_category(category);
        self.start_new_game();
        found
    }

    pub fn start_random_category(&mut self) {
        self.words.set_random_category();
        self.start_new_game();
    }

    /// Guess through to the round, tallying the result if it ends the round
    pub fn guess_letter(&mut self, letter: char) -> bool {
        let was_over = self.round.is_over();
        let hit = self.round.guess_letter(letter);
        if !was_over {
            match self.round.status() {
                RoundStatus::Won => {
                    self.score.wins += 1;
                    info!(word = self.round.current_word(), "round won");
                }
                RoundStatus::Lost => {
                    self.score.losses += 1;
                    info!(word = self.round.current_word(), "round lost");
                }
                RoundStatus::InProgress => {}
            }
        }
        hit
    }

    pub fn display_word(&self) -> String {
        self.round.display_word()
    }

    pub fn wrong_guess_count(&self) -> u8 {
        self.round.wrong_guess_count()
    }

    pub fn max_wrong_guesses(&self) -> u8 {
        self.round.max_wrong_guesses()
    }

    pub fn is_won(&self) -> bool {
        self.round.is_won()
    }

    pub fn is_over(&self) -> bool {
        self.round.is_over()
    }

    pub fn current_word(&self) -> &str {
        self.round.current_word()
    }

    pub fn all_categories(&self) -> &[Category] {
        self.words.all_categories()
    }

    pub fn current_category(&self) -> Option<&Category> {
        self.words.current_category()
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn score(&self) -> Score {
        self.score
    }

    fn handle_categories_key(&mut self, code: KeyCode, selected: usize) {
        let count = self.words.all_categories().len();
        match code {
            KeyCode::Up => {
                self.screen = Screen::Categories { selected: selected.saturating_sub(1) };
            }
            KeyCode::Down => {
                let last = count.saturating_sub(1);
                self.screen = Screen::Categories { selected: (selected + 1).min(last) };
            }
            KeyCode::Enter => {
                let name = self.words.all_categories().get(selected).map(|c| c.name.clone());
                match name {
                    Some(name) => {
                        self.start_new_game_in(&name);
                    }
                    None => self.start_new_game(),
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.start_random_category(),
            _ => {}
        }
    }

    fn handle_playing_key(&mut self, code: KeyCode) {
        match code {
            // The round itself accepts late guesses; stop them here
            KeyCode::Char(c) if c.is_alphabetic() => {
                if !self.round.is_over() {
                    self.guess_letter(c);
                }
            }
            KeyCode::Enter if self.round.is_over() => self.start_new_game(),
            KeyCode::Tab => {
                let selected = self
                    .current_category()
                    .and_then(|current| {
                        self.all_categories().iter().position(|c| c.name == current.name)
                    })
                    .unwrap_or(0);
                self.screen = Screen::Categories { selected };
            }
            _ => {}
        }
    }
}

impl Game for HangmanGame {
    fn handle_input(&mut self, event: KeyEvent) -> Control {
        match self.screen {
            Screen::Categories { selected } => self.handle_categories_key(event.code, selected),
            Screen::Playing => self.handle_playing_key(event.code),
        }
        Control::Continue
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        match self.screen {
            Screen::Categories { selected } => renderer::render_categories(frame, self, selected),
            Screen::Playing => renderer::render_round(frame, self),
        }
    }
}
