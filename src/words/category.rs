use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::words::LoadError;

/// Returned when no category can supply a word.
pub const FALLBACK_WORD: &str = "PALMEIRAS";

/// A named, iconized collection of candidate words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(alias = "nome")]
    pub name: String,
    #[serde(alias = "icone")]
    pub icon: String,
    #[serde(alias = "palavras")]
    pub words: Vec<String>,
}

/// Top-level shape of a category data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesContainer {
    #[serde(alias = "categorias")]
    pub categories: Vec<Category>,
}

impl Category {
    pub fn new(name: impl Into<String>, icon: impl Into<String>, words: Vec<String>) -> Self {
        Self { name: name.into(), icon: icon.into(), words }
    }

    /// The category used whenever external data cannot be loaded.
    pub fn fallback() -> Self {
        let words = [
            "PALMEIRAS", "FLAMENGO", "CORINTHIANS", "SAO PAULO",
            "SANTOS", "VASCO", "CRUZEIRO", "ATLETICO MINEIRO",
            "GREMIO", "INTERNACIONAL", "BOTAFOGO", "FLUMINENSE",
            "NEYMAR", "PELE", "ROMARIO", "RONALDO", "RIVALDO",
        ];
        Self::new("Futebol Brasileiro", "⚽️", words.iter().map(|w| w.to_string()).collect())
    }
}

/// Parse and validate a JSON category container.
///
/// Words come back trimmed and uppercased. Any structural problem rejects
/// the whole payload; there is no partial load.
pub fn parse_categories(json: &str) -> Result<Vec<Category>, LoadError> {
    let container: CategoriesContainer = serde_json::from_str(json)?;
    if container.categories.is_empty() {
        return Err(LoadError::NoCategories);
    }

    let mut seen = HashSet::new();
    let mut categories = Vec::with_capacity(container.categories.len());
    for (index, raw) in container.categories.into_iter().enumerate() {
        let name = raw.name.trim().to_string();
        if name.is_empty() {
            return Err(LoadError::EmptyCategoryName { index });
        }
        if !seen.insert(name.clone()) {
            return Err(LoadError::DuplicateCategory { name });
        }
        if raw.words.is_empty() {
            return Err(LoadError::EmptyWordList { name });
        }

        let mut words = Vec::with_capacity(raw.words.len());
        for word in raw.words {
            let word = word.trim().to_uppercase();
            if word.is_empty() {
                return Err(LoadError::EmptyWord { name });
            }
            if !word.chars().all(|c| c == ' ' || c.is_alphabetic()) {
                return Err(LoadError::InvalidWord { name, word });
            }
            words.push(word);
        }

        categories.push(Category { name, icon: raw.icon, words });
    }

    Ok(categories)
}
