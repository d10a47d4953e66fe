//! LLM Client: the single point of entry for all language-model calls.
//!
//! No other module may talk to the model service directly. The production
//! backend is a local Ollama server reached through `OllamaClient`.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

pub mod prompts;
pub mod repair;

const CHAT_PATH: &str = "/api/chat";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("LLM HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("LLM API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    #[serde(default)]
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Decoding options. Temperature 0 gives deterministic output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChatOptions {
    pub temperature: f32,
}

impl ChatOptions {
    pub fn deterministic() -> Self {
        Self { temperature: 0.0 }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub message: ChatMessage,
    #[serde(default)]
    pub eval_count: Option<u32>,
}

impl ChatResponse {
    pub fn text(&self) -> &str {
        &self.message.content
    }
}

#[derive(Debug, Serialize)]
struct OllamaChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
    options: &'a ChatOptions,
}

#[derive(Debug, Deserialize)]
struct OllamaError {
    error: String,
}

/// The chat model trait. Carried by the pipeline as `Arc<dyn ChatModel>`.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn chat(
        &self,
        model: &str,
        messages: &[ChatMessage],
        options: &ChatOptions,
    ) -> Result<ChatResponse, LlmError>;

    /// Sends a system + user prompt and repairs the reply into a JSON object.
    /// Malformed replies come back as an empty map; transport errors are returned.
    async fn chat_json(
        &self,
        model: &str,
        system: &str,
        prompt: &str,
    ) -> Result<Map<String, Value>, LlmError> {
        let messages = [ChatMessage::system(system), ChatMessage::user(prompt)];
        let response = self
            .chat(model, &messages, &ChatOptions::deterministic())
            .await?;
        Ok(repair::repair_json_object(response.text()))
    }
}

/// Client for a local Ollama server.
#[derive(Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
}

impl OllamaClient {
    pub fn new(base_url: String) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ChatModel for OllamaClient {
    async fn chat(
        &self,
        model: &str,
        messages: &[ChatMessage],
        options: &ChatOptions,
    ) -> Result<ChatResponse, LlmError> {
        let request_body = OllamaChatRequest {
            model,
            messages,
            stream: false,
            options,
        };

        let response = self
            .client
            .post(format!("{}{}", self.base_url, CHAT_PATH))
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<OllamaError>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat_response: ChatResponse = response.json().await?;

        debug!(
            "LLM call succeeded: model={}, chars={}, eval_count={:?}",
            model,
            chat_response.text().len(),
            chat_response.eval_count
        );

        Ok(chat_response)
    }
}
