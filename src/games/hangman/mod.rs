/// Hangman game module
pub mod game;
pub mod renderer;
pub mod round;

pub use game::{HangmanGame, Score, Screen};
pub use round::{Round, RoundStatus, MAX_WRONG_GUESSES};
