//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The asset host serves the board's static bundle (page, wasm package,
//! images) from `ASSETS_DIR` and the word list from `WORDS_PATH`. The word
//! list route takes precedence over any `woerter.json` in the bundle.

pub mod words;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Path the browser host fetches the word list from.
pub const WORDS_ROUTE: &str = "/woerter.json";

/// Full router: word list, health check, and the static bundle as fallback.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let assets = ServeDir::new(&state.config.assets_dir).append_index_html_on_directories(true);

    Router::new()
        .route(WORDS_ROUTE, get(words::get_words))
        .route("/healthz", get(healthz))
        .fallback_service(assets)
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
