// Guess domain: the funny-guess composer and its service wrapper.
// All model calls go through llm_client; no direct OpenRouter calls here.

pub mod composer;
pub mod generator;
pub mod handlers;
pub mod prompts;
