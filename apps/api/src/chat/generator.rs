//! Chat suggestion service: per-mood model attempts with per-mood fallback.

use tracing::{debug, warn};

use crate::chat::classifier::classify;
use crate::chat::prompts::{
    mood_instruction, CHAT_MAX_TOKENS, CHAT_PROMPT_TEMPLATE, CHAT_SYSTEM_PROMPT, CHAT_TEMPERATURE,
};
use crate::chat::responses::{resolve_mood, select_many, select_response};
use crate::llm_client::{CompletionRequest, TextModel};

/// One suggestion per requested mood, at most `count`.
///
/// Each mood is attempted against the model independently; a failed call
/// falls back to the canned (mood, context) pool for that position only, so
/// one bad call never empties the whole batch. Without a model the whole
/// batch comes from the canned tables.
pub async fn generate_suggestions(
    model: Option<&dyn TextModel>,
    message: &str,
    moods: &[String],
    count: usize,
) -> Vec<String> {
    let Some(model) = model else {
        return select_many(message, moods, count, &mut rand::thread_rng());
    };

    let context = classify(message);
    let mut suggestions = Vec::with_capacity(count.min(moods.len()));

    for mood in moods.iter().take(count) {
        let suggestion = match suggestion_from_model(model, message, mood).await {
            Some(s) => s,
            None => {
                debug!(
                    "Serving canned {} suggestion for {} context",
                    resolve_mood(mood).as_str(),
                    context.as_str()
                );
                select_response(mood, context, &mut rand::thread_rng())
            }
        };
        suggestions.push(suggestion);
    }

    suggestions
}

async fn suggestion_from_model(
    model: &dyn TextModel,
    message: &str,
    mood: &str,
) -> Option<String> {
    let prompt = CHAT_PROMPT_TEMPLATE
        .replace("{message}", message)
        .replace("{instruction}", mood_instruction(mood))
        .replace("{mood}", mood);

    match model
        .complete(CompletionRequest {
            system: Some(CHAT_SYSTEM_PROMPT),
            prompt: &prompt,
            max_tokens: CHAT_MAX_TOKENS,
            temperature: CHAT_TEMPERATURE,
        })
        .await
    {
        Ok(text) => Some(text),
        Err(e) => {
            warn!("Model chat suggestion failed for mood '{mood}', using canned pool: {e}");
            None
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
