// Resume enhancement pipeline.
// Implements: keyword extraction, match scoring, rule-based rewriting,
// provider-backed enhancement with fallback, and request orchestration.
// All Gemini calls go through llm_client — no direct HTTP calls here.

pub mod bullets;
pub mod enhancer;
pub mod fit_scoring;
pub mod handlers;
pub mod keywords;
pub mod processor;
pub mod prompts;
