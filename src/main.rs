mod config;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = dotenvy::dotenv()
        && !err.not_found()
    {
        eprintln!("ignoring malformed .env: {err}");
    }
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env()?;
    let port = config.port;

    if !config.assets_dir.is_dir() {
        tracing::warn!(dir = %config.assets_dir.display(), "assets directory missing; only the word list will be served");
    }
    match services::words::load_word_list(&config.words_path).await {
        Ok(list) => tracing::info!(count = list.len(), path = %config.words_path.display(), "word list ok"),
        Err(e) => tracing::warn!(error = %e, "word list not servable yet; board will stay empty"),
    }

    let app = routes::app(state::AppState::new(config));
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "flashboard listening");
    axum::serve(listener, app).await?;
    Ok(())
}
