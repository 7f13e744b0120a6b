//! Word list route.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;

use crate::services::words::{self, WordsError};
use crate::state::AppState;

/// `GET /woerter.json`: the validated word list.
pub async fn get_words(State(state): State<AppState>) -> Result<Json<Vec<String>>, StatusCode> {
    let path = &state.config.words_path;
    match words::load_word_list(path).await {
        Ok(list) => {
            tracing::debug!(count = list.len(), path = %path.display(), "serving word list");
            Ok(Json(list))
        }
        Err(err) => {
            tracing::error!(error = %err, path = %path.display(), "word list unavailable");
            Err(words_error_to_status(&err))
        }
    }
}

pub(crate) fn words_error_to_status(err: &WordsError) -> StatusCode {
    match err {
        WordsError::NotFound(_) => StatusCode::NOT_FOUND,
        WordsError::Io(_) | WordsError::Invalid(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
#[path = "words_test.rs"]
mod tests;
