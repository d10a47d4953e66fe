// Shared prompt constants.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// System instruction that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "Return ONLY JSON";
