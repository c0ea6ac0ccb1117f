//! Word generation service: model attempts with bank-backed fallbacks.
//!
//! Every function here is total: a missing model, a failed call, or a
//! malformed reply degrades to the word bank instead of propagating an error.

use tracing::warn;

use crate::llm_client::{CompletionRequest, TextModel};
use crate::words::bank::{WordBank, FALLBACK_TOPIC};
use crate::words::prompts::{
    MULTI_WORD_MAX_TOKENS, MULTI_WORD_PROMPT_TEMPLATE, MULTI_WORD_TEMPERATURE,
    SINGLE_WORD_MAX_TOKENS, SINGLE_WORD_PROMPT_TEMPLATE, SINGLE_WORD_TEMPERATURE,
};
use crate::words::sampler::sample_words;

/// Both word lists for a words-by-topic request: the model-sourced list
/// (may be empty) and the sampler-drawn fallback list.
#[derive(Debug, Clone)]
pub struct TopicWordLists {
    pub topic: String,
    pub ai_words: Vec<String>,
    pub fallback_words: Vec<String>,
}

/// Produces the model-sourced and fallback word lists for a topic.
///
/// The fallback list always holds exactly `count` words (bank permitting);
/// the model list is empty when no model is configured or the call fails.
pub async fn generate_topic_words(
    model: Option<&dyn TextModel>,
    bank: &WordBank,
    topic: &str,
    count: usize,
) -> TopicWordLists {
    let resolved = bank.resolve_topic(topic);

    let ai_words = words_from_model(model, bank, resolved, count).await;
    let fallback_words = sample_words(bank, resolved, count, &mut rand::thread_rng());

    TopicWordLists {
        topic: resolved.to_string(),
        ai_words,
        fallback_words,
    }
}

/// One (topic, word) pair for the game.
///
/// A provided topic goes through the model first (when one is configured);
/// a missing topic picks a uniformly random bank topic and draws from it.
pub async fn generate_single_word(
    model: Option<&dyn TextModel>,
    bank: &WordBank,
    topic: Option<&str>,
) -> (String, String) {
    if let (Some(model), Some(topic)) = (model, topic) {
        let resolved = bank.resolve_topic(topic);
        if let Some(word) = word_from_model(model, resolved).await {
            return (resolved.to_string(), word);
        }
    }

    let mut rng = rand::thread_rng();
    let resolved = match topic {
        Some(t) => bank.resolve_topic(t).to_string(),
        None => bank
            .random_topic(&mut rng)
            .unwrap_or(FALLBACK_TOPIC)
            .to_string(),
    };

    let word = sample_words(bank, &resolved, 1, &mut rng)
        .into_iter()
        .next()
        .unwrap_or_default();

    (resolved, word)
}

/// Asks the model for `count` words and normalizes the reply.
/// Empty when no model is configured or the call fails.
async fn words_from_model(
    model: Option<&dyn TextModel>,
    bank: &WordBank,
    topic: &str,
    count: usize,
) -> Vec<String> {
    let Some(model) = model else {
        return Vec::new();
    };

    let prompt = MULTI_WORD_PROMPT_TEMPLATE
        .replace("{count}", &count.to_string())
        .replace("{topic}", topic);

    let reply = model
        .complete(CompletionRequest {
            system: None,
            prompt: &prompt,
            max_tokens: MULTI_WORD_MAX_TOKENS,
            temperature: MULTI_WORD_TEMPERATURE,
        })
        .await;

    match reply {
        Ok(text) => clean_word_reply(&text, bank.words(topic), count),
        Err(e) => {
            warn!("Model word generation failed, serving bank words only: {e}");
            Vec::new()
        }
    }
}

async fn word_from_model(model: &dyn TextModel, topic: &str) -> Option<String> {
    let prompt = SINGLE_WORD_PROMPT_TEMPLATE.replace("{topic}", topic);

    match model
        .complete(CompletionRequest {
            system: None,
            prompt: &prompt,
            max_tokens: SINGLE_WORD_MAX_TOKENS,
            temperature: SINGLE_WORD_TEMPERATURE,
        })
        .await
    {
        Ok(text) => Some(text.trim().to_lowercase()),
        Err(e) => {
            warn!("Model single-word generation failed, drawing from the bank: {e}");
            None
        }
    }
}

/// Normalizes a comma-separated model reply into at most `count` usable words.
///
/// Split on commas, trim, lowercase, strip non-alphabetic characters, keep
/// words of 3 to 10 characters, drop duplicates. Too few survivors are padded
/// from the topic's bank words (skipping ones already present) before the
/// final truncation.
fn clean_word_reply(reply: &str, bank_words: &[String], count: usize) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();

    for raw in reply.split(',') {
        let cleaned: String = raw
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphabetic())
            .collect();
        if (3..=10).contains(&cleaned.chars().count()) && !words.contains(&cleaned) {
            words.push(cleaned);
        }
    }

    if words.len() < count {
        for fallback in bank_words {
            if words.len() >= count {
                break;
            }
            if !words.contains(fallback) {
                words.push(fallback.clone());
            }
        }
    }

    words.truncate(count);
    words
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;
    use std::collections::HashMap;

    struct FixedReplyModel(&'static str);

    #[async_trait]
    impl TextModel for FixedReplyModel {
        async fn complete(&self, _request: CompletionRequest<'_>) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingModel;

    #[async_trait]
    impl TextModel for FailingModel {
        async fn complete(&self, _request: CompletionRequest<'_>) -> Result<String, LlmError> {
            Err(LlmError::EmptyContent)
        }
    }

    fn make_bank(entries: &[(&str, &[&str])]) -> WordBank {
        let mut topics = HashMap::new();
        for (name, words) in entries {
            topics.insert(
                name.to_string(),
                words.iter().map(|w| w.to_string()).collect(),
            );
        }
        WordBank::new(topics)
    }

    // ── clean_word_reply ────────────────────────────────────────────────────

    #[test]
    fn test_clean_reply_happy_path() {
        let bank_words: Vec<String> = vec![];
        let words = clean_word_reply("cat, dog, fish", &bank_words, 3);
        assert_eq!(words, vec!["cat", "dog", "fish"]);
    }

    #[test]
    fn test_clean_reply_normalizes_case_and_punctuation() {
        let bank_words: Vec<String> = vec![];
        let words = clean_word_reply("  Cat!, DOG , fi_sh ", &bank_words, 3);
        assert_eq!(words, vec!["cat", "dog", "fish"]);
    }

    #[test]
    fn test_clean_reply_enforces_length_window() {
        let bank_words: Vec<String> = vec![];
        // "ox" is too short, "hippopotamuses" too long after cleaning
        let words = clean_word_reply("ox, cat, hippopotamuses", &bank_words, 3);
        assert_eq!(words, vec!["cat"]);
    }

    #[test]
    fn test_clean_reply_drops_duplicates() {
        let bank_words: Vec<String> = vec![];
        let words = clean_word_reply("cat, Cat, dog", &bank_words, 3);
        assert_eq!(words, vec!["cat", "dog"]);
    }

    #[test]
    fn test_clean_reply_pads_from_bank_skipping_present() {
        let bank_words = vec!["cat".to_string(), "dog".to_string(), "fish".to_string()];
        let words = clean_word_reply("cat", &bank_words, 3);
        assert_eq!(words, vec!["cat", "dog", "fish"]);
    }

    #[test]
    fn test_clean_reply_truncates_to_count() {
        let bank_words: Vec<String> = vec![];
        let words = clean_word_reply("cat, dog, fish, bird, frog, bear", &bank_words, 4);
        assert_eq!(words, vec!["cat", "dog", "fish", "bird"]);
    }

    // ── generate_topic_words ────────────────────────────────────────────────

    #[tokio::test]
    async fn test_topic_words_without_model_serves_fallback_only() {
        let bank = WordBank::standard();
        let lists = generate_topic_words(None, &bank, "Animals", 5).await;
        assert!(lists.ai_words.is_empty());
        assert_eq!(lists.fallback_words.len(), 5);
        assert_eq!(lists.topic, "Animals");
    }

    #[tokio::test]
    async fn test_topic_words_uses_model_reply() {
        let bank = WordBank::standard();
        let model = FixedReplyModel("cat, dog, sun, car, book");
        let lists = generate_topic_words(Some(&model), &bank, "Animals", 5).await;
        assert_eq!(lists.ai_words, vec!["cat", "dog", "sun", "car", "book"]);
        assert_eq!(lists.fallback_words.len(), 5);
    }

    #[tokio::test]
    async fn test_topic_words_pads_short_model_reply_from_bank() {
        let bank = WordBank::standard();
        let model = FixedReplyModel("cat, dog");
        let lists = generate_topic_words(Some(&model), &bank, "Animals", 5).await;
        assert_eq!(lists.ai_words.len(), 5);
        for word in &lists.ai_words[2..] {
            assert!(bank.words("Animals").contains(word));
        }
    }

    #[tokio::test]
    async fn test_topic_words_model_failure_leaves_ai_list_empty() {
        let bank = WordBank::standard();
        let lists = generate_topic_words(Some(&FailingModel), &bank, "Food", 5).await;
        assert!(lists.ai_words.is_empty());
        assert_eq!(lists.fallback_words.len(), 5);
    }

    #[tokio::test]
    async fn test_topic_words_resolves_unknown_topic() {
        let bank = WordBank::standard();
        let lists = generate_topic_words(None, &bank, "Dinosaurs", 5).await;
        assert_eq!(lists.topic, FALLBACK_TOPIC);
        for word in &lists.fallback_words {
            assert!(bank.words(FALLBACK_TOPIC).contains(word));
        }
    }

    // ── generate_single_word ────────────────────────────────────────────────

    #[tokio::test]
    async fn test_single_word_without_topic_picks_random_topic() {
        let bank = WordBank::standard();
        let (topic, word) = generate_single_word(None, &bank, None).await;
        assert!(bank.topics().contains(&topic.as_str()));
        assert!(bank.words(&topic).contains(&word));
    }

    #[tokio::test]
    async fn test_single_word_prefers_model_reply() {
        let bank = WordBank::standard();
        let model = FixedReplyModel("  Giraffe  ");
        let (topic, word) = generate_single_word(Some(&model), &bank, Some("Animals")).await;
        assert_eq!(topic, "Animals");
        assert_eq!(word, "giraffe", "reply must be trimmed and lowercased");
    }

    #[tokio::test]
    async fn test_single_word_model_failure_falls_back_to_bank() {
        let bank = WordBank::standard();
        let (topic, word) = generate_single_word(Some(&FailingModel), &bank, Some("Nature")).await;
        assert_eq!(topic, "Nature");
        assert!(bank.words("Nature").contains(&word));
    }

    #[tokio::test]
    async fn test_single_word_unknown_topic_resolves_to_fallback() {
        let bank = WordBank::standard();
        let (topic, word) = generate_single_word(None, &bank, Some("Dinosaurs")).await;
        assert_eq!(topic, FALLBACK_TOPIC);
        assert!(bank.words(FALLBACK_TOPIC).contains(&word));
    }

    #[tokio::test]
    async fn test_single_word_empty_bank_degrades_to_empty_word() {
        let bank = make_bank(&[]);
        let (topic, word) = generate_single_word(None, &bank, None).await;
        assert_eq!(topic, FALLBACK_TOPIC);
        assert!(word.is_empty());
    }
}
