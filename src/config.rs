//! Asset host configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ASSETS_DIR: &str = "web";
pub const DEFAULT_WORDS_PATH: &str = "web/woerter.json";

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub assets_dir: PathBuf,
    pub words_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            words_path: PathBuf::from(DEFAULT_WORDS_PATH),
        }
    }
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    /// - `ASSETS_DIR`: static bundle root, default `web`
    /// - `WORDS_PATH`: word list file, default `web/woerter.json`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `PORT` is not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw.clone() })?,
            Err(_) => DEFAULT_PORT,
        };
        let assets_dir = env_path("ASSETS_DIR", DEFAULT_ASSETS_DIR);
        let words_path = env_path("WORDS_PATH", DEFAULT_WORDS_PATH);

        Ok(Self { port, assets_dir, words_path })
    }
}

fn env_path(key: &str, default: &str) -> PathBuf {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map_or_else(|| PathBuf::from(default), PathBuf::from)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
