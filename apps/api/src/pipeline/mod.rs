//! Job Agent: orchestrates one request end to end.
//!
//! Flow: job search → extraction → role analysis → roadmap enrichment →
//!       final output.
//!
//! The flow is a fixed list of steps. `JobAgent::run` is the direct call;
//! `JobAgent::invoke` walks the same steps over a caller-provided state.
//! Every external call is awaited before the next step starts.

pub mod state;

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::analysis::analyzer::analyze_role;
use crate::config::Config;
use crate::jobs::extract::{extract_top_jobs, DEFAULT_JOB_LIMIT};
use crate::jobs::search::search_jobs;
use crate::llm_client::{ChatModel, LlmError, OllamaClient};
use crate::roadmap::enrich_roadmap;
use crate::search::{SearchError, SearchProvider, TavilyClient};

pub use state::{FinalResponse, JobAssistantData, PipelineState};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Llm(#[from] LlmError),
}

/// A named node of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    JobSearch,
    RoleAnalysis,
    RoadmapEnrichment,
    FinalOutput,
}

impl Step {
    pub fn name(self) -> &'static str {
        match self {
            Step::JobSearch => "job_search",
            Step::RoleAnalysis => "role_analysis",
            Step::RoadmapEnrichment => "roadmap_enrichment",
            Step::FinalOutput => "final_output",
        }
    }
}

/// Execution order. There are no other edges.
pub const STEPS: [Step; 4] = [
    Step::JobSearch,
    Step::RoleAnalysis,
    Step::RoadmapEnrichment,
    Step::FinalOutput,
];

#[derive(Clone)]
pub struct JobAgent {
    search: Arc<dyn SearchProvider>,
    llm: Arc<dyn ChatModel>,
    model: String,
}

impl JobAgent {
    pub fn new(
        search: Arc<dyn SearchProvider>,
        llm: Arc<dyn ChatModel>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            search,
            llm,
            model: model.into(),
        }
    }

    /// Wires the Tavily and Ollama clients described by `config`.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let search = TavilyClient::new(config.tavily_api_url.clone(), config.tavily_api_key.clone())?;
        let llm = OllamaClient::new(config.ollama_url.clone())?;
        Ok(Self::new(
            Arc::new(search),
            Arc::new(llm),
            config.ollama_model.clone(),
        ))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Runs the pipeline for `role` in `location` and returns the response document.
    pub async fn run(&self, role: &str, location: &str) -> Result<FinalResponse, PipelineError> {
        let mut state = self.invoke(PipelineState::new(role, location)).await?;
        Ok(state
            .final_response
            .take()
            .unwrap_or_else(|| state.assemble()))
    }

    /// Walks every step over `state` and returns it completed.
    pub async fn invoke(&self, mut state: PipelineState) -> Result<PipelineState, PipelineError> {
        info!(
            "[{}] Starting job agent for role {:?} in {:?}",
            state.run_id, state.role, state.location
        );

        for step in STEPS {
            info!("[{}] Step {}", state.run_id, step.name());
            self.run_step(step, &mut state).await?;
        }

        info!(
            "[{}] Job agent finished with {} jobs",
            state.run_id,
            state.jobs.len()
        );
        Ok(state)
    }

    async fn run_step(&self, step: Step, state: &mut PipelineState) -> Result<(), PipelineError> {
        match step {
            Step::JobSearch => {
                let results = search_jobs(&state.role, &state.location, self.search.as_ref()).await?;
                state.jobs = extract_top_jobs(&results, DEFAULT_JOB_LIMIT);
            }
            Step::RoleAnalysis => {
                state.role_analysis =
                    analyze_role(&state.role, self.llm.as_ref(), &self.model).await?;
            }
            Step::RoadmapEnrichment => {
                let roadmap = std::mem::take(&mut state.role_analysis.preparation_roadmap);
                state.roadmap = enrich_roadmap(roadmap, self.search.as_ref()).await?;
            }
            Step::FinalOutput => {
                state.final_response = Some(state.assemble());
            }
        }
        Ok(())
    }
}
