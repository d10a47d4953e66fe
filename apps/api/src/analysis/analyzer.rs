//! Role Analyzer: asks the model to describe a role and plan its preparation.

use tracing::{info, warn};

use crate::analysis::models::RoleAnalysis;
use crate::analysis::prompts::role_analysis_prompt;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{ChatModel, LlmError};

/// Analyzes `role` with a single deterministic chat call.
///
/// Output the repair pass cannot recover yields an empty analysis; only
/// transport and API errors from the model service are returned.
pub async fn analyze_role(
    role: &str,
    llm: &dyn ChatModel,
    model: &str,
) -> Result<RoleAnalysis, LlmError> {
    let prompt = role_analysis_prompt(role);
    let reply = llm.chat_json(model, JSON_ONLY_SYSTEM, &prompt).await?;

    if reply.is_empty() {
        warn!("Model reply for role {role:?} held no JSON object; using empty analysis");
    }

    let analysis = RoleAnalysis::from_model_output(reply);
    info!(
        "Role analysis for {role:?}: {} fundamentals, {} advanced, {} projects",
        analysis.preparation_roadmap.fundamentals.len(),
        analysis.preparation_roadmap.advanced.len(),
        analysis.preparation_roadmap.projects.len()
    );

    Ok(analysis)
}
