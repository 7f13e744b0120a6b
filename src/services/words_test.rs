use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Write `body` to a fresh file in the temp dir and return its path.
fn temp_file(body: &str) -> PathBuf {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path = std::env::temp_dir().join(format!("flashboard-words-{}-{n}.json", std::process::id()));
    std::fs::write(&path, body).unwrap();
    path
}

#[tokio::test]
async fn loads_valid_list() {
    let path = temp_file(r#"["Haus", "Baum", "Straße"]"#);
    let words = load_word_list(&path).await.unwrap();
    assert_eq!(words, vec!["Haus", "Baum", "Straße"]);
    std::fs::remove_file(path).unwrap();
}

#[tokio::test]
async fn empty_list_is_valid() {
    let path = temp_file("[]");
    assert!(load_word_list(&path).await.unwrap().is_empty());
    std::fs::remove_file(path).unwrap();
}

#[tokio::test]
async fn missing_file_is_not_found() {
    let path = std::env::temp_dir().join("flashboard-words-does-not-exist.json");
    let err = load_word_list(&path).await.unwrap_err();
    assert!(matches!(err, WordsError::NotFound(_)));
}

#[tokio::test]
async fn malformed_file_is_invalid() {
    let path = temp_file(r#"{"words": ["a"]}"#);
    let err = load_word_list(&path).await.unwrap_err();
    assert!(matches!(err, WordsError::Invalid(WordListError::Parse(_))));
    assert!(err.to_string().starts_with("word list parse failed"));
    std::fs::remove_file(path).unwrap();
}
