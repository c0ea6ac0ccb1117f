pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers as chat_handlers;
use crate::guess::handlers as guess_handlers;
use crate::state::AppState;
use crate::words::handlers as word_handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Guess API
        .route(
            "/generate-funny-response",
            post(guess_handlers::handle_funny_response),
        )
        // Chat API
        .route(
            "/generate-chat-suggestions",
            post(chat_handlers::handle_chat_suggestions),
        )
        // Words API
        .route(
            "/generate-words-by-topic",
            post(word_handlers::handle_words_by_topic),
        )
        .route("/generate-word", post(word_handlers::handle_single_word))
        .route("/word-topics", get(word_handlers::handle_word_topics))
        .with_state(state)
}
