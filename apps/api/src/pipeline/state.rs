use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::models::{JobOverview, RequiredSkills, RoleAnalysis};
use crate::jobs::JobPosting;
use crate::roadmap::EnrichedRoadmap;

pub const SUCCESS_STATUS: &str = "success";

/// The record threaded through one pipeline run. Owned by a single request.
#[derive(Debug, Clone)]
pub struct PipelineState {
    /// Correlates the log lines of one run.
    pub run_id: Uuid,
    pub role: String,
    pub location: String,
    pub jobs: Vec<JobPosting>,
    pub role_analysis: RoleAnalysis,
    pub roadmap: EnrichedRoadmap,
    pub final_response: Option<FinalResponse>,
}

impl PipelineState {
    pub fn new(role: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            role: role.into(),
            location: location.into(),
            jobs: Vec::new(),
            role_analysis: RoleAnalysis::default(),
            roadmap: EnrichedRoadmap::default(),
            final_response: None,
        }
    }

    /// Builds the response document from whatever the state holds so far.
    pub fn assemble(&self) -> FinalResponse {
        FinalResponse {
            status: SUCCESS_STATUS.to_string(),
            data: JobAssistantData {
                role: self.role.clone(),
                location: self.location.clone(),
                total_jobs: self.jobs.len(),
                jobs: self.jobs.clone(),
                job_overview: self.role_analysis.job_overview.clone(),
                job_required_skills: self.role_analysis.job_required_skills.clone(),
                preparation_roadmap: self.roadmap.clone(),
            },
        }
    }
}

/// `{status, data}` envelope returned by every invocation style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalResponse {
    pub status: String,
    pub data: JobAssistantData,
}

/// Field order is the serialized order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobAssistantData {
    pub role: String,
    pub location: String,
    pub total_jobs: usize,
    pub jobs: Vec<JobPosting>,
    pub job_overview: JobOverview,
    pub job_required_skills: RequiredSkills,
    pub preparation_roadmap: EnrichedRoadmap,
}
