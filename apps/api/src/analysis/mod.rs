// Role analysis: one LLM call per request that describes the role and
// proposes a preparation roadmap. All LLM calls go through llm_client.

pub mod analyzer;
pub mod models;
pub mod prompts;
