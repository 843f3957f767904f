// Career intent classification.
// All LLM calls go through llm_client, no direct OpenAI calls here.

pub mod classifier;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod remote;
pub mod rules;
