use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::pipeline::FinalResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct JobSearchRequest {
    pub role: String,
    #[serde(default)]
    pub location: Option<String>,
}

/// POST /job-search
///
/// Runs the full job agent for the requested role and location.
/// The body is validated before any provider is called.
pub async fn handle_job_search(
    State(state): State<AppState>,
    payload: Result<Json<JobSearchRequest>, JsonRejection>,
) -> Result<Json<FinalResponse>, AppError> {
    let Json(request) = payload?;

    if request.role.trim().is_empty() {
        return Err(AppError::Validation("role cannot be empty".to_string()));
    }

    let location = request.location.unwrap_or_default();
    let response = state.agent.run(&request.role, &location).await?;

    Ok(Json(response))
}
