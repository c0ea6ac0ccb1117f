//! Axum route handler for the funny-response API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::guess::generator::generate_funny_response;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnyResponseRequest {
    pub guess: String,
    pub correct_word: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnyResponseResponse {
    pub funny_response: String,
}

/// POST /generate-funny-response
///
/// A humorous reply to a wrong guess that never reveals the answer.
pub async fn handle_funny_response(
    State(state): State<AppState>,
    Json(request): Json<FunnyResponseRequest>,
) -> Result<Json<FunnyResponseResponse>, AppError> {
    if request.guess.trim().is_empty() {
        return Err(AppError::Validation("guess cannot be empty".to_string()));
    }
    if request.correct_word.trim().is_empty() {
        return Err(AppError::Validation(
            "correctWord cannot be empty".to_string(),
        ));
    }

    let funny_response = generate_funny_response(
        state.model.as_deref(),
        &request.guess,
        &request.correct_word,
    )
    .await;

    Ok(Json(FunnyResponseResponse { funny_response }))
}
