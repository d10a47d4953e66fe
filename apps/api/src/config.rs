use anyhow::{Context, Result};

const DEFAULT_TAVILY_API_URL: &str = "https://api.tavily.com/search";
const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
const DEFAULT_OLLAMA_MODEL: &str = "llama3";

/// Application configuration loaded from environment variables.
/// Startup fails if `TAVILY_API_KEY` is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub tavily_api_key: String,
    pub tavily_api_url: String,
    pub ollama_url: String,
    pub ollama_model: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            tavily_api_key: require_env("TAVILY_API_KEY")?,
            tavily_api_url: env_or("TAVILY_API_URL", DEFAULT_TAVILY_API_URL),
            ollama_url: env_or("OLLAMA_URL", DEFAULT_OLLAMA_URL),
            ollama_model: env_or("OLLAMA_MODEL", DEFAULT_OLLAMA_MODEL),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
