//! Runs the job agent once and prints the response document to stdout.

use anyhow::Result;
use clap::Parser;

use job_assistant::config::Config;
use job_assistant::pipeline::JobAgent;
use job_assistant::telemetry::init_tracing;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Job role to search and analyze
    #[arg(long, default_value = "Frontend Developer")]
    role: String,

    /// Location used to narrow the job search
    #[arg(long, default_value = "India")]
    location: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // stdout carries the JSON document only
    init_tracing(&config.rust_log, std::io::stderr);

    let agent = JobAgent::from_config(&config)?;
    let response = agent.run(&cli.role, &cli.location).await?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
