//! Funny-response service: model attempt first, canned composer fallback.

use tracing::warn;

use crate::guess::composer::compose_funny_response;
use crate::guess::prompts::{
    FUNNY_RESPONSE_MAX_TOKENS, FUNNY_RESPONSE_PROMPT_TEMPLATE, FUNNY_RESPONSE_TEMPERATURE,
};
use crate::llm_client::{CompletionRequest, TextModel};

/// A quip for a wrong guess. The model goes first when configured; any
/// failure falls back to the canned composer, so this always returns text.
pub async fn generate_funny_response(
    model: Option<&dyn TextModel>,
    guess: &str,
    correct_word: &str,
) -> String {
    if let Some(model) = model {
        let prompt = FUNNY_RESPONSE_PROMPT_TEMPLATE
            .replace("{guess}", guess)
            .replace("{correct_word}", correct_word);

        match model
            .complete(CompletionRequest {
                system: None,
                prompt: &prompt,
                max_tokens: FUNNY_RESPONSE_MAX_TOKENS,
                temperature: FUNNY_RESPONSE_TEMPERATURE,
            })
            .await
        {
            Ok(text) => return text,
            Err(e) => warn!("Model funny response failed, using canned composer: {e}"),
        }
    }

    compose_funny_response(guess, correct_word, &mut rand::thread_rng())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
