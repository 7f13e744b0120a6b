//! Word list decoding.
//!
//! The word list is a JSON array of strings. It is shared by the browser host,
//! which fetches it, and the asset server, which validates it before serving.

#[cfg(test)]
#[path = "words_test.rs"]
mod words_test;

/// Errors produced while loading the word list.
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    /// The request for the word list failed or returned a non-success status.
    #[error("word list fetch failed: {0}")]
    Fetch(String),

    /// The body is not a JSON array of strings.
    #[error("word list parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a JSON array of strings.
///
/// # Errors
///
/// Returns [`WordListError::Parse`] if `body` is not a JSON array of strings.
pub fn parse_word_list(body: &str) -> Result<Vec<String>, WordListError> {
    Ok(serde_json::from_str(body)?)
}
