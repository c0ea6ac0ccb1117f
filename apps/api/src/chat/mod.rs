// Chat domain: message classification, canned mood responses, and the
// chat-suggestion service.
// All model calls go through llm_client; no direct OpenRouter calls here.

pub mod classifier;
pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod responses;
