// Résumé generation service: prompts, model calls, profile strength and the
// HTTP handlers that also drive layout and rendering.
// All LLM calls go through llm_client; nothing here calls the API directly.

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod strength;
pub mod suggestions;
