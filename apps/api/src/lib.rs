//! AI job assistant: finds openings for a role, analyzes the role with a
//! language model and attaches tutorial videos to the preparation roadmap.

pub mod analysis;
pub mod config;
pub mod errors;
pub mod jobs;
pub mod llm_client;
pub mod pipeline;
pub mod roadmap;
pub mod routes;
pub mod search;
pub mod state;
pub mod telemetry;
pub mod videos;

#[cfg(test)]
mod test_support;
