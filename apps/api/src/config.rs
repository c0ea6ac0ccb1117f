use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a workable default: the service must come up
/// (in fallback-only mode) even on a completely bare environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// `None` disables the remote model; handlers serve fallbacks only.
    pub openrouter_api_key: Option<String>,
    pub openrouter_model: String,
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            // An empty OPENROUTER_API_KEY counts as unset
            openrouter_api_key: std::env::var("OPENROUTER_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            openrouter_model: std::env::var("OPENROUTER_MODEL")
                .unwrap_or_else(|_| crate::llm_client::DEFAULT_MODEL.to_string()),
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
