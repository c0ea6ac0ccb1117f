//! Axum route handlers for the words API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;
use crate::words::bank::FALLBACK_TOPIC;
use crate::words::generator::{generate_single_word, generate_topic_words};

/// Hard cap on a words-by-topic request; keeps the cycling sampler away from
/// absurd counts.
const MAX_WORD_COUNT: usize = 50;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

fn default_topic() -> String {
    FALLBACK_TOPIC.to_string()
}

fn default_count() -> usize {
    5
}

#[derive(Debug, Deserialize)]
pub struct WordsByTopicRequest {
    #[serde(default = "default_topic")]
    pub topic: String,
    #[serde(default = "default_count")]
    pub count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordsByTopicResponse {
    pub words: Vec<String>,
    pub fallback_words: Vec<String>,
    pub topic: String,
}

#[derive(Debug, Deserialize)]
pub struct SingleWordRequest {
    pub topic: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SingleWordResponse {
    pub topic: String,
    pub word: String,
}

#[derive(Debug, Serialize)]
pub struct TopicsResponse {
    pub topics: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /generate-words-by-topic
///
/// Returns the model-sourced words (empty when the model is unavailable or
/// fails) and the bank-drawn fallback words side by side. Unknown topics are
/// served from the fallback topic, which is echoed back.
pub async fn handle_words_by_topic(
    State(state): State<AppState>,
    Json(request): Json<WordsByTopicRequest>,
) -> Result<Json<WordsByTopicResponse>, AppError> {
    if request.count == 0 || request.count > MAX_WORD_COUNT {
        return Err(AppError::Validation(format!(
            "count must be between 1 and {MAX_WORD_COUNT}"
        )));
    }

    let lists = generate_topic_words(
        state.model.as_deref(),
        &state.bank,
        &request.topic,
        request.count,
    )
    .await;

    Ok(Json(WordsByTopicResponse {
        words: lists.ai_words,
        fallback_words: lists.fallback_words,
        topic: lists.topic,
    }))
}

/// POST /generate-word
///
/// One (topic, word) pair; a missing topic is drawn at random from the bank.
pub async fn handle_single_word(
    State(state): State<AppState>,
    Json(request): Json<SingleWordRequest>,
) -> Result<Json<SingleWordResponse>, AppError> {
    let (topic, word) = generate_single_word(
        state.model.as_deref(),
        &state.bank,
        request.topic.as_deref(),
    )
    .await;

    Ok(Json(SingleWordResponse { topic, word }))
}

/// GET /word-topics
///
/// The bank's topic keys, for client-side topic pickers.
pub async fn handle_word_topics(State(state): State<AppState>) -> Json<TopicsResponse> {
    Json(TopicsResponse {
        topics: state
            .bank
            .topics()
            .into_iter()
            .map(str::to_string)
            .collect(),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
