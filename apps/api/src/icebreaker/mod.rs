// Icebreaker generation: profile validation, prompt building, the response
// contract, the one-shot generation pipeline, and the visible-outcome slot.
// All model calls go through llm_client.

pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod schema;
pub mod session;
pub mod validation;
