mod chat;
mod config;
mod errors;
mod guess;
mod llm_client;
mod routes;
mod state;
mod words;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{OpenRouterClient, TextModel};
use crate::routes::build_router;
use crate::state::AppState;
use crate::words::bank::WordBank;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            // Hyphens are not valid in filter directives; targets use underscores
            let target = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{}={}", target, &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Drawsy LLM service v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the remote model, if an API key is configured
    let model: Option<Arc<dyn TextModel>> = match &config.openrouter_api_key {
        Some(key) => {
            info!(
                "OpenRouter initialized with model: {}",
                config.openrouter_model
            );
            Some(Arc::new(OpenRouterClient::new(
                key.clone(),
                config.openrouter_model.clone(),
            )))
        }
        None => {
            warn!("No OpenRouter API key found, using fallback responses only");
            None
        }
    };

    // The word bank backs every fallback path
    let bank = Arc::new(WordBank::standard());
    info!("Word bank loaded ({} topics)", bank.topics().len());

    // Build app state
    let state = AppState { model, bank };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
