//! Tutorial video lookup for roadmap topics.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::search::{SearchError, SearchProvider, SearchRequest};

pub const VIDEO_HOST: &str = "youtube.com";
pub const DEFAULT_VIDEOS_PER_TOPIC: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub title: String,
    pub url: String,
}

pub fn video_search_query(topic: &str) -> String {
    format!("{topic} tutorial site:{VIDEO_HOST}")
}

/// Finds up to `limit` tutorial videos for `topic`, in provider order.
/// Results hosted anywhere other than the video host are dropped.
pub async fn search_videos(
    topic: &str,
    limit: usize,
    search: &dyn SearchProvider,
) -> Result<Vec<Video>, SearchError> {
    let request = SearchRequest::basic(video_search_query(topic), limit);
    let response = search.search(&request).await?;

    let videos: Vec<Video> = response
        .results
        .into_iter()
        .filter(|r| r.url.contains(VIDEO_HOST))
        .map(|r| Video {
            title: r.title,
            url: r.url,
        })
        .collect();

    debug!("Found {} videos for topic {topic:?}", videos.len());
    Ok(videos)
}
