use crate::pipeline::JobAgent;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds only immutable clients; each request builds its own pipeline state.
#[derive(Clone)]
pub struct AppState {
    pub agent: JobAgent,
}
