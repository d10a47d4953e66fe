//! In-memory providers shared by unit tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm_client::{ChatMessage, ChatModel, ChatOptions, ChatResponse, LlmError};
use crate::search::{SearchError, SearchProvider, SearchRequest, SearchResponse, SearchResult};

pub const FRONTEND_ANALYSIS_REPLY: &str = r#"{
  "job_overview": {
    "summary": "Builds and maintains user-facing web applications.",
    "responsibilities": ["Implement UI components", "Collaborate with designers"]
  },
  "job_required_skills": {
    "technical": ["JavaScript", "React"],
    "non_technical": ["Communication"],
    "tools": ["Git", "Webpack"]
  },
  "preparation_roadmap": {
    "fundamentals": ["HTML", "CSS", "JavaScript"],
    "advanced": ["React performance"],
    "projects": ["Portfolio website"],
    "interview_topics": ["Closures", "Event loop"]
  }
}"#;

pub fn result(title: &str, url: &str) -> SearchResult {
    SearchResult {
        title: title.to_string(),
        url: url.to_string(),
        ..SearchResult::default()
    }
}

pub fn sample_jobs() -> Vec<SearchResult> {
    vec![
        result("Acme - Frontend Engineer", "https://boards.greenhouse.io/acme/1"),
        result("Acme - Senior Frontend Engineer", "https://boards.greenhouse.io/acme/2"),
        result("Beta Corp - UI Developer", "https://jobs.lever.co/beta/3"),
        result("", "https://jobs.lever.co/blank/4"),
        result("Gamma - React Developer", "https://gamma.wd1.myworkdayjobs.com/5"),
    ]
}

pub fn sample_videos() -> Vec<SearchResult> {
    vec![
        result("Crash course", "https://www.youtube.com/watch?v=abc"),
        result("Blog post", "https://example.com/post"),
        result("Deep dive", "https://www.youtube.com/watch?v=def"),
    ]
}

/// Serves `jobs` for job-board queries and `videos` for video queries.
pub struct FakeSearch {
    jobs: Vec<SearchResult>,
    videos: Vec<SearchResult>,
    fail: bool,
    requests: Mutex<Vec<SearchRequest>>,
}

impl FakeSearch {
    pub fn new(jobs: Vec<SearchResult>, videos: Vec<SearchResult>) -> Self {
        Self {
            jobs,
            videos,
            fail: false,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(Vec::new(), Vec::new())
        }
    }

    pub fn requests(&self) -> Vec<SearchRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchProvider for FakeSearch {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        self.requests.lock().unwrap().push(request.clone());
        if self.fail {
            return Err(SearchError::Api {
                status: 432,
                message: "usage limit exceeded".to_string(),
            });
        }

        let pool = if request.query.contains("site:youtube.com") {
            &self.videos
        } else {
            &self.jobs
        };

        Ok(SearchResponse {
            results: pool.iter().take(request.max_results).cloned().collect(),
        })
    }
}

pub struct ChatCall {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub options: ChatOptions,
}

/// Replies with a fixed string, or fails with a 503.
pub struct FakeChat {
    reply: Option<String>,
    calls: Mutex<Vec<ChatCall>>,
}

impl FakeChat {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> std::sync::MutexGuard<'_, Vec<ChatCall>> {
        self.calls.lock().unwrap()
    }
}

#[async_trait]
impl ChatModel for FakeChat {
    async fn chat(
        &self,
        model: &str,
        messages: &[ChatMessage],
        options: &ChatOptions,
    ) -> Result<ChatResponse, LlmError> {
        self.calls.lock().unwrap().push(ChatCall {
            model: model.to_string(),
            messages: messages.to_vec(),
            options: *options,
        });

        match &self.reply {
            Some(content) => Ok(ChatResponse {
                message: ChatMessage {
                    role: "assistant".to_string(),
                    content: content.clone(),
                },
                eval_count: None,
            }),
            None => Err(LlmError::Api {
                status: 503,
                message: "model service unavailable".to_string(),
            }),
        }
    }
}
