use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::words::{parse_categories, Category, LoadError, FALLBACK_WORD};

/// Which category random words are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection {
    Unset,
    Selected(usize),
}

/// Owns the categories of one session and picks words from them.
///
/// Not shared: every session constructs (or clones) its own repository,
/// since the current selection and the RNG are mutable state.
#[derive(Debug, Clone)]
pub struct WordRepository {
    categories: Vec<Category>,
    current: Selection,
    rng: StdRng,
}

impl WordRepository {
    /// Empty repository with an OS-seeded RNG.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Empty repository whose word picks are reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self { categories: Vec::new(), current: Selection::Unset, rng }
    }

    /// Repository holding only the built-in category.
    pub fn with_defaults() -> Self {
        let mut repo = Self::new();
        repo.install_fallback();
        repo
    }

    /// Load categories from a JSON data file.
    ///
    /// On error the built-in category has already been installed; the
    /// error is handed back only so the caller can report it.
    pub fn load_file(&mut self, path: &Path) -> Result<(), LoadError> {
        debug!(path = %path.display(), "loading categories");
        let loaded = std::fs::read_to_string(path)
            .map_err(LoadError::from)
            .and_then(|json| parse_categories(&json));
        self.apply(loaded)
    }

    /// Load categories from an in-memory JSON payload. Same contract as
    /// [`WordRepository::load_file`].
    pub fn load_str(&mut self, json: &str) -> Result<(), LoadError> {
        self.apply(parse_categories(json))
    }

    fn apply(&mut self, loaded: Result<Vec<Category>, LoadError>) -> Result<(), LoadError> {
        match loaded {
            Ok(categories) => {
                self.categories = categories;
                self.current = Selection::Selected(0);
                info!(
                    categories = self.categories.len(),
                    words = self.total_word_count(),
                    "loaded categories"
                );
                Ok(())
            }
            Err(error) => {
                warn!(%error, "category data unusable, using built-in words");
                self.install_fallback();
                Err(error)
            }
        }
    }

    fn install_fallback(&mut self) {
        self.categories = vec![Category::fallback()];
        self.current = Selection::Selected(0);
    }

    /// Uniformly random word from the current category.
    pub fn random_word(&mut self) -> String {
        match self.current {
            Selection::Selected(index) => self.pick_from(index),
            Selection::Unset => FALLBACK_WORD.to_string(),
        }
    }

    /// Uniformly random word from the category named `name`, or from the
    /// current category when no such category exists.
    pub fn random_word_from(&mut self, name: &str) -> String {
        match self.position(name) {
            Some(index) if !self.categories[index].words.is_empty() => self.pick_from(index),
            _ => self.random_word(),
        }
    }

    fn pick_from(&mut self, index: usize) -> String {
        let Some(category) = self.categories.get(index) else {
            return FALLBACK_WORD.to_string();
        };
        if category.words.is_empty() {
            return FALLBACK_WORD.to_string();
        }
        let pick = self.rng.random_range(0..category.words.len());
        category.words[pick].clone()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.name == name)
    }

    pub fn all_categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn current_category(&self) -> Option<&Category> {
        match self.current {
            Selection::Selected(index) => self.categories.get(index),
            Selection::Unset => None,
        }
    }

    /// Select the category named exactly `name`. Leaves the selection alone
    /// and returns `false` when there is none.
    pub fn set_current_category(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(index) => {
                self.current = Selection::Selected(index);
                true
            }
            None => {
                debug!(name, "no such category, selection unchanged");
                false
            }
        }
    }

    pub fn set_random_category(&mut self) {
        if self.categories.is_empty() {
            return;
        }
        let index = self.rng.random_range(0..self.categories.len());
        self.current = Selection::Selected(index);
    }

    pub fn total_word_count(&self) -> usize {
        self.categories.iter().map(|c| c.words.len()).sum()
    }
}

impl Default for WordRepository {
    fn default() -> Self {
        Self::new()
    }
}
