//! Axum route handlers for the chat API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::chat::generator::generate_suggestions;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

fn default_count() -> usize {
    3
}

fn default_moods() -> Vec<String> {
    vec![
        "encouraging".to_string(),
        "curious".to_string(),
        "playful".to_string(),
    ]
}

#[derive(Debug, Deserialize)]
pub struct ChatSuggestionsRequest {
    pub message: String,
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default = "default_moods")]
    pub moods: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatSuggestionsResponse {
    pub suggestions: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /generate-chat-suggestions
///
/// One suggestion per requested mood (encouraging, curious and playful by
/// default), capped at `count`.
pub async fn handle_chat_suggestions(
    State(state): State<AppState>,
    Json(request): Json<ChatSuggestionsRequest>,
) -> Result<Json<ChatSuggestionsResponse>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    let suggestions = generate_suggestions(
        state.model.as_deref(),
        &request.message,
        &request.moods,
        request.count,
    )
    .await;

    Ok(Json(ChatSuggestionsResponse { suggestions }))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::bank::WordBank;
    use std::sync::Arc;

    fn make_state() -> AppState {
        AppState {
            model: None,
            bank: Arc::new(WordBank::standard()),
        }
    }

    #[test]
    fn test_chat_request_defaults() {
        let request: ChatSuggestionsRequest =
            serde_json::from_str(r#"{"message": "hello"}"#).unwrap();
        assert_eq!(request.count, 3);
        assert_eq!(request.moods, vec!["encouraging", "curious", "playful"]);
    }

    #[test]
    fn test_chat_request_accepts_custom_moods() {
        let request: ChatSuggestionsRequest = serde_json::from_str(
            r#"{"message": "hi", "count": 1, "moods": ["playful"]}"#,
        )
        .unwrap();
        assert_eq!(request.count, 1);
        assert_eq!(request.moods, vec!["playful"]);
    }

    #[test]
    fn test_chat_request_requires_message() {
        let result: Result<ChatSuggestionsRequest, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_handler_rejects_blank_message() {
        let request = ChatSuggestionsRequest {
            message: "   ".to_string(),
            count: 3,
            moods: default_moods(),
        };
        let result = handle_chat_suggestions(State(make_state()), Json(request)).await;
        assert!(matches!(result, Err(AppError::Validation(msg)) if msg.contains("message")));
    }
}
