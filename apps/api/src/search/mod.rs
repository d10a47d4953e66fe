//! Search client: the single point of entry for web search calls.
//!
//! Job and video lookups both go through a `SearchProvider`. The production
//! backend is `TavilyClient`; tests swap in an in-memory provider.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use tracing::debug;

/// Search depth understood by the provider.
pub const BASIC_DEPTH: &str = "basic";

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Search HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Search API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// A single search call: query text, depth and result bound.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub search_depth: String,
    pub max_results: usize,
}

impl SearchRequest {
    pub fn basic(query: impl Into<String>, max_results: usize) -> Self {
        Self {
            query: query.into(),
            search_depth: BASIC_DEPTH.to_string(),
            max_results,
        }
    }
}

/// One raw result record. Only `title` and `url` are relied upon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

/// The search provider trait. Carried by the pipeline as `Arc<dyn SearchProvider>`.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError>;
}

#[derive(Debug, Serialize)]
struct TavilyRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    search_depth: &'a str,
    max_results: usize,
}

/// Tavily search API client.
#[derive(Clone)]
pub struct TavilyClient {
    client: Client,
    api_url: String,
    api_key: String,
}

impl TavilyClient {
    pub fn new(api_url: String, api_key: String) -> Result<Self, SearchError> {
        Ok(Self {
            client: Client::builder().build()?,
            api_url,
            api_key,
        })
    }
}

#[async_trait]
impl SearchProvider for TavilyClient {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        let body = TavilyRequest {
            api_key: &self.api_key,
            query: &request.query,
            search_depth: &request.search_depth,
            max_results: request.max_results,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SearchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: SearchResponse = response.json().await?;
        debug!(
            "Search returned {} results for query {:?}",
            parsed.results.len(),
            request.query
        );

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> TavilyClient {
        TavilyClient::new(format!("{}/search", server.uri()), "tvly-test".to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_search_sends_query_and_parses_results() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .and(header("authorization", "Bearer tvly-test"))
            .and(body_partial_json(json!({
                "api_key": "tvly-test",
                "query": "rust tutorial",
                "search_depth": "basic",
                "max_results": 2
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "query": "rust tutorial",
                "results": [
                    {"title": "Rust in 100 seconds", "url": "https://www.youtube.com/watch?v=1", "content": "...", "score": 0.9},
                    {"title": "The Book", "url": "https://doc.rust-lang.org/book/"}
                ]
            })))
            .mount(&server)
            .await;

        let response = client_for(&server)
            .search(&SearchRequest::basic("rust tutorial", 2))
            .await
            .unwrap();

        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[0].title, "Rust in 100 seconds");
        assert_eq!(response.results[0].score, Some(0.9));
        assert_eq!(response.results[1].content, None);
    }

    #[tokio::test]
    async fn test_search_missing_results_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"query": "x"})))
            .mount(&server)
            .await;

        let response = client_for(&server)
            .search(&SearchRequest::basic("x", 15))
            .await
            .unwrap();
        assert!(response.results.is_empty());
    }

    #[tokio::test]
    async fn test_search_error_status_propagates() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .search(&SearchRequest::basic("x", 15))
            .await
            .unwrap_err();

        match err {
            SearchError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "invalid api key");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_result_tolerates_missing_title_and_url() {
        let result: SearchResult = serde_json::from_str(r#"{"content": "no links"}"#).unwrap();
        assert!(result.title.is_empty());
        assert!(result.url.is_empty());

        let result: SearchResult =
            serde_json::from_str(r#"{"title": null, "url": "https://lever.co/a"}"#).unwrap();
        assert!(result.title.is_empty());
        assert_eq!(result.url, "https://lever.co/a");
    }
}
