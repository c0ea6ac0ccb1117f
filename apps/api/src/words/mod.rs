// Words domain: the topic word bank, the exact-count sampler, and the word
// generation service on top of them.
// All model calls go through llm_client; no direct OpenRouter calls here.

pub mod bank;
pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod sampler;
