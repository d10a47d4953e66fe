use anyhow::Result;
use std::net::SocketAddr;
use tracing::info;

use job_assistant::config::Config;
use job_assistant::pipeline::JobAgent;
use job_assistant::routes::build_router;
use job_assistant::state::AppState;
use job_assistant::telemetry::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing TAVILY_API_KEY)
    let config = Config::from_env()?;

    init_tracing(&config.rust_log, std::io::stdout);

    info!("Starting AI Job Assistant v{}", env!("CARGO_PKG_VERSION"));

    let agent = JobAgent::from_config(&config)?;
    info!("Search client initialized ({})", config.tavily_api_url);
    info!(
        "LLM client initialized ({}, model: {})",
        config.ollama_url,
        agent.model()
    );

    let app = build_router(AppState { agent });

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
