use std::collections::BTreeSet;

/// Wrong guesses allowed before a round is lost.
pub const MAX_WRONG_GUESSES: u8 = 6;

const PLACEHOLDER: char = '_';

/// Outcome of a round, derived from its letters and error count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

/// State of a single hangman round.
///
/// `Round` does not refuse guesses after the round is over; callers check
/// [`Round::is_over`] before submitting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Round {
    word: String,
    guessed: BTreeSet<char>,
    wrong_guesses: u8,
}

fn canonical(letter: char) -> char {
    letter.to_uppercase().next().unwrap_or(letter)
}

impl Round {
    pub fn new(word: &str) -> Self {
        let mut round = Self::default();
        round.start_new_game(word);
        round
    }

    /// Reset every counter and take `word` (uppercased) as the target.
    pub fn start_new_game(&mut self, word: &str) {
        self.word = word.to_uppercase();
        self.guessed.clear();
        self.wrong_guesses = 0;
    }

    /// Returns `true` only for a new letter that occurs in the word.
    /// Repeats return `false` without costing a guess.
    pub fn guess_letter(&mut self, letter: char) -> bool {
        let letter = canonical(letter);
        if !self.guessed.insert(letter) {
            return false;
        }

        let hit = letter != ' ' && self.word.contains(letter);
        if !hit {
            self.wrong_guesses = self.wrong_guesses.saturating_add(1);
        }
        hit
    }

    /// The word with unguessed letters masked, one space between positions.
    pub fn display_word(&self) -> String {
        let mut out = String::with_capacity(self.word.len() * 2);
        for (i, c) in self.word.chars().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(if self.is_revealed(c) { c } else { PLACEHOLDER });
        }
        out
    }

    fn is_revealed(&self, c: char) -> bool {
        c == ' ' || self.guessed.contains(&c)
    }

    /// Every letter of the word has been guessed. An empty word counts as won.
    pub fn is_won(&self) -> bool {
        self.word.chars().all(|c| self.is_revealed(c))
    }

    pub fn is_over(&self) -> bool {
        self.is_won() || self.wrong_guesses >= MAX_WRONG_GUESSES
    }

    pub fn status(&self) -> RoundStatus {
        if self.is_won() {
            RoundStatus::Won
        } else if self.wrong_guesses >= MAX_WRONG_GUESSES {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        }
    }

    pub fn current_word(&self) -> &str {
        &self.word
    }

    pub fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    /// Whether `letter` was guessed and occurs in the word.
    pub fn is_hit(&self, letter: char) -> bool {
        let letter = canonical(letter);
        letter != ' ' && self.guessed.contains(&letter) && self.word.contains(letter)
    }

    pub fn wrong_guess_count(&self) -> u8 {
        self.wrong_guesses
    }

    pub fn max_wrong_guesses(&self) -> u8 {
        MAX_WRONG_GUESSES
    }

    pub fn remaining_guesses(&self) -> u8 {
        MAX_WRONG_GUESSES.saturating_sub(self.wrong_guesses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_round_is_fully_masked() {
        let round = Round::new("rust");
        assert_eq!(round.current_word(), "RUST");
        assert_eq!(round.display_word(), "_ _ _ _");
        assert_eq!(round.status(), RoundStatus::InProgress);
    }

    #[test]
    fn test_spaces_are_always_revealed() {
        let mut round = Round::new("SAO PAULO");
        assert_eq!(round.display_word(), "_ _ _   _ _ _ _ _");
        round.guess_letter('a');
        assert_eq!(round.display_word(), "_ A _   _ A _ _ _");
    }

    #[test]
    fn test_space_guess_never_matches() {
        let mut round = Round::new("SAO PAULO");
        assert!(!round.guess_letter(' '));
        assert_eq!(round.wrong_guess_count(), 1);
    }

    #[test]
    fn test_lowercase_guess_matches() {
        let mut round = Round::new("PELE");
        assert!(round.guess_letter('p'));
        assert!(!round.guess_letter('P'));
        assert_eq!(round.guessed_letters().len(), 1);
        assert!(round.is_hit('p'));
    }

    #[test]
    fn test_empty_word_is_won() {
        let round = Round::new("");
        assert!(round.is_won());
        assert!(round.is_over());
        assert_eq!(round.display_word(), "");
    }

    #[test]
    fn test_restart_resets_state() {
        let mut round = Round::new("VASCO");
        round.guess_letter('x');
        round.guess_letter('v');
        round.start_new_game("santos");
        assert_eq!(round.wrong_guess_count(), 0);
        assert!(round.guessed_letters().is_empty());
        assert_eq!(round.current_word(), "SANTOS");
    }

    #[test]
    fn test_remaining_guesses_counts_down() {
        let mut round = Round::new("A");
        for c in ['B', 'C', 'D'] {
            round.guess_letter(c);
        }
        assert_eq!(round.remaining_guesses(), 3);
    }
}
