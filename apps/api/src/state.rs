use std::sync::Arc;

use crate::llm_client::TextModel;
use crate::words::bank::WordBank;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Remote text model, or `None` when no API key is configured.
    /// Handlers treat `None` as "serve the canned fallback".
    pub model: Option<Arc<dyn TextModel>>,
    pub bank: Arc<WordBank>,
}
