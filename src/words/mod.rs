/// Category data and word selection
pub mod category;
pub mod error;
pub mod repository;

pub use category::{parse_categories, CategoriesContainer, Category, FALLBACK_WORD};
pub use error::LoadError;
pub use repository::WordRepository;
