//! Word list loading for the asset host.
//!
//! The file is read on every request so edits show up on the next page load
//! without a restart. Content is validated with the same decoder the browser
//! uses, so a malformed file is reported here instead of silently producing an
//! empty board.

use std::io::ErrorKind;
use std::path::Path;

use canvas::words::{WordListError, parse_word_list};

#[derive(Debug, thiserror::Error)]
pub enum WordsError {
    #[error("word list not found: {0}")]
    NotFound(String),

    #[error("word list unreadable: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Invalid(#[from] WordListError),
}

/// Read and validate the word list at `path`.
///
/// # Errors
///
/// Returns [`WordsError::NotFound`] if the file does not exist,
/// [`WordsError::Io`] if it cannot be read, and [`WordsError::Invalid`] if it
/// is not a JSON array of strings.
pub async fn load_word_list(path: &Path) -> Result<Vec<String>, WordsError> {
    let body = match tokio::fs::read_to_string(path).await {
        Ok(body) => body,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(WordsError::NotFound(path.display().to_string()));
        }
        Err(err) => return Err(err.into()),
    };
    Ok(parse_word_list(&body)?)
}

#[cfg(test)]
#[path = "words_test.rs"]
mod tests;
