//! Roadmap enrichment: pairs each learning topic with tutorial videos.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::models::PreparationRoadmap;
use crate::search::{SearchError, SearchProvider};
use crate::videos::{search_videos, Video, DEFAULT_VIDEOS_PER_TOPIC};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapItem {
    pub topic: String,
    pub youtube_videos: Vec<Video>,
}

/// A `PreparationRoadmap` whose study sections carry videos.
/// Interview topics are kept as plain strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRoadmap {
    pub fundamentals: Vec<RoadmapItem>,
    pub advanced: Vec<RoadmapItem>,
    pub projects: Vec<RoadmapItem>,
    pub interview_topics: Vec<String>,
}

/// Looks up videos for every fundamentals, advanced and projects topic.
/// Lookups run one at a time, section by section, in topic order.
pub async fn enrich_roadmap(
    roadmap: PreparationRoadmap,
    search: &dyn SearchProvider,
) -> Result<EnrichedRoadmap, SearchError> {
    let PreparationRoadmap {
        fundamentals,
        advanced,
        projects,
        interview_topics,
    } = roadmap;

    let enriched = EnrichedRoadmap {
        fundamentals: enrich_section(fundamentals, search).await?,
        advanced: enrich_section(advanced, search).await?,
        projects: enrich_section(projects, search).await?,
        interview_topics,
    };

    info!(
        "Enriched {} roadmap topics with videos",
        enriched.fundamentals.len() + enriched.advanced.len() + enriched.projects.len()
    );
    Ok(enriched)
}

async fn enrich_section(
    topics: Vec<String>,
    search: &dyn SearchProvider,
) -> Result<Vec<RoadmapItem>, SearchError> {
    let mut items = Vec::with_capacity(topics.len());
    for topic in topics {
        let youtube_videos = search_videos(&topic, DEFAULT_VIDEOS_PER_TOPIC, search).await?;
        items.push(RoadmapItem {
            topic,
            youtube_videos,
        });
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_videos, FakeSearch};

    fn roadmap() -> PreparationRoadmap {
        PreparationRoadmap {
            fundamentals: vec!["HTML".to_string(), "CSS".to_string()],
            advanced: vec!["Web performance".to_string()],
            projects: Vec::new(),
            interview_topics: vec!["Closures".to_string()],
        }
    }

    #[tokio::test]
    async fn test_each_study_topic_gets_videos_in_order() {
        let search = FakeSearch::new(Vec::new(), sample_videos());

        let enriched = enrich_roadmap(roadmap(), &search).await.unwrap();

        let topics: Vec<&str> = enriched
            .fundamentals
            .iter()
            .map(|item| item.topic.as_str())
            .collect();
        assert_eq!(topics, vec!["HTML", "CSS"]);
        assert_eq!(enriched.advanced[0].topic, "Web performance");
        assert!(enriched.projects.is_empty());

        // Provider returns two results per topic; the non-video one is filtered.
        assert_eq!(enriched.fundamentals[0].youtube_videos.len(), 1);
        assert!(enriched.fundamentals[0].youtube_videos[0]
            .url
            .contains("youtube.com"));

        let queries: Vec<String> = search.requests().into_iter().map(|r| r.query).collect();
        assert_eq!(
            queries,
            vec![
                "HTML tutorial site:youtube.com",
                "CSS tutorial site:youtube.com",
                "Web performance tutorial site:youtube.com",
            ]
        );
    }

    #[tokio::test]
    async fn test_interview_topics_are_not_enriched() {
        let search = FakeSearch::new(Vec::new(), sample_videos());

        let enriched = enrich_roadmap(roadmap(), &search).await.unwrap();

        assert_eq!(enriched.interview_topics, vec!["Closures"]);
        assert!(search
            .requests()
            .iter()
            .all(|r| !r.query.starts_with("Closures")));
    }

    #[tokio::test]
    async fn test_empty_roadmap_makes_no_calls() {
        let search = FakeSearch::new(Vec::new(), sample_videos());

        let enriched = enrich_roadmap(PreparationRoadmap::default(), &search)
            .await
            .unwrap();

        assert_eq!(enriched, EnrichedRoadmap::default());
        assert!(search.requests().is_empty());
    }

    #[tokio::test]
    async fn test_search_failure_propagates() {
        let search = FakeSearch::failing();
        assert!(enrich_roadmap(roadmap(), &search).await.is_err());
    }
}
