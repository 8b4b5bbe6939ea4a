//! Errors raised while loading category data.

use thiserror::Error;

/// Why a category source was rejected.
///
/// The repository recovers from every variant by installing the built-in
/// category, so these only ever reach a caller as a report.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The data file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The payload is not a category container
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no categories in source")]
    NoCategories,

    #[error("category #{index} has an empty name")]
    EmptyCategoryName { index: usize },

    #[error("category '{name}' appears more than once")]
    DuplicateCategory { name: String },

    #[error("category '{name}' has no words")]
    EmptyWordList { name: String },

    #[error("category '{name}' contains an empty word")]
    EmptyWord { name: String },

    /// Only letters and spaces can be revealed by guessing
    #[error("word '{word}' in category '{name}' contains characters other than letters and spaces")]
    InvalidWord { name: String, word: String },
}
