//! Tests for loading categories and drawing words.

use std::io::Write;

use hangterm::words::{CategoriesContainer, FALLBACK_WORD};
use hangterm::{Category, LoadError, WordRepository};
use tempfile::NamedTempFile;

fn sample() -> CategoriesContainer {
    CategoriesContainer {
        categories: vec![
            Category::new("Clubs", "⚽️", vec!["vasco".into(), "sao paulo".into(), "gremio".into()]),
            Category::new("Legends", "⭐", vec!["PELE".into(), "ROMARIO".into()]),
            Category::new("Fruits", "🍎", vec!["MANGO".into()]),
        ],
    }
}

fn write_json(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn loaded(seed: u64) -> WordRepository {
    let mut repo = WordRepository::seeded(seed);
    repo.load_str(&serde_json::to_string(&sample()).unwrap()).unwrap();
    repo
}

#[test]
fn test_load_file_keeps_order_and_selects_first() {
    let file = write_json(&serde_json::to_string(&sample()).unwrap());
    let mut repo = WordRepository::seeded(1);
    repo.load_file(file.path()).unwrap();

    let names: Vec<&str> = repo.all_categories().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Clubs", "Legends", "Fruits"]);
    assert_eq!(repo.current_category().unwrap().name, "Clubs");
    assert_eq!(repo.all_categories()[0].words, vec!["VASCO", "SAO PAULO", "GREMIO"]);
}

#[test]
fn test_total_word_count_sums_categories() {
    let repo = loaded(1);
    let expected: usize = repo.all_categories().iter().map(|c| c.words.len()).sum();
    assert_eq!(repo.total_word_count(), expected);
    assert_eq!(repo.total_word_count(), 6);
}

#[test]
fn test_malformed_source_falls_back() {
    let mut repo = loaded(1);
    let err = repo.load_str("{ not json").unwrap_err();
    assert!(matches!(err, LoadError::Json(_)));

    assert_eq!(repo.all_categories().len(), 1);
    assert_eq!(repo.current_category(), Some(&Category::fallback()));
    assert!(repo.total_word_count() >= 1);
}

#[test]
fn test_missing_file_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let mut repo = WordRepository::seeded(1);
    let err = repo.load_file(&dir.path().join("words.json")).unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
    assert_eq!(repo.all_categories(), &[Category::fallback()]);
}

#[test]
fn test_empty_word_list_falls_back() {
    let file = write_json(r#"{"categories":[{"name":"A","icon":"","words":["X"]},{"name":"B","icon":"","words":[]}]}"#);
    let mut repo = WordRepository::seeded(1);
    assert!(repo.load_file(file.path()).is_err());
    assert_eq!(repo.all_categories(), &[Category::fallback()]);
}

#[test]
fn test_fallback_words_come_from_fallback_category() {
    let mut repo = WordRepository::seeded(9);
    let _ = repo.load_str("[]");
    let fallback = Category::fallback();
    for _ in 0..20 {
        assert!(fallback.words.contains(&repo.random_word()));
    }
}

#[test]
fn test_random_word_stays_in_current_category() {
    let mut repo = loaded(5);
    repo.set_current_category("Legends");
    for _ in 0..20 {
        let word = repo.random_word();
        assert!(word == "PELE" || word == "ROMARIO", "unexpected {word}");
    }
}

#[test]
fn test_random_word_reaches_every_word() {
    let mut repo = loaded(11);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..200 {
        seen.insert(repo.random_word());
    }
    assert_eq!(seen.len(), 3);
}

#[test]
fn test_random_word_from_named_category() {
    let mut repo = loaded(2);
    assert_eq!(repo.random_word_from("Fruits"), "MANGO");
    assert_eq!(repo.current_category().unwrap().name, "Clubs");
}

#[test]
fn test_random_word_from_unknown_matches_current() {
    let mut a = loaded(42);
    let mut b = loaded(42);
    for _ in 0..10 {
        assert_eq!(a.random_word_from("Nonexistent"), b.random_word());
    }
}

#[test]
fn test_set_current_category_unknown_is_noop() {
    let mut repo = loaded(1);
    assert!(repo.set_current_category("Fruits"));
    assert!(!repo.set_current_category("fruits"));
    assert!(!repo.set_current_category("Nonexistent"));
    assert_eq!(repo.current_category().unwrap().name, "Fruits");
}

#[test]
fn test_set_random_category_picks_member() {
    let mut repo = loaded(3);
    for _ in 0..20 {
        repo.set_random_category();
        let current = repo.current_category().unwrap();
        assert!(repo.all_categories().contains(current));
    }
}

#[test]
fn test_unloaded_repository_is_total() {
    let mut repo = WordRepository::seeded(0);
    assert_eq!(repo.random_word(), FALLBACK_WORD);
    assert_eq!(repo.random_word_from("Clubs"), FALLBACK_WORD);
    assert!(repo.all_categories().is_empty());
}

#[test]
fn test_bundled_words_load() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/words.json");
    let mut repo = WordRepository::seeded(1);
    repo.load_file(&path).unwrap();
    assert!(repo.all_categories().len() > 1);
    assert_eq!(repo.current_category().unwrap().name, "Futebol Brasileiro");
}
