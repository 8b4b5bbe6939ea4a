pub mod cli;
pub mod core;
pub mod games;
pub mod words;

// Re-export for convenience
pub use crate::core::game::{Control, Game};
pub use crate::games::hangman::{HangmanGame, Round, RoundStatus};
pub use crate::words::{Category, LoadError, WordRepository};
