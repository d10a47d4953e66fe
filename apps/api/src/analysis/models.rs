//! Role analysis data model.
//!
//! The model does not always honour the requested shape, so every field
//! defaults to empty and the lenient deserializers below accept near-misses
//! (a bare string where a list was asked for, numbers in a topic list).

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobOverview {
    #[serde(default, deserialize_with = "text")]
    pub summary: String,
    #[serde(default, deserialize_with = "text_list")]
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequiredSkills {
    #[serde(default, deserialize_with = "text_list")]
    pub technical: Vec<String>,
    #[serde(default, deserialize_with = "text_list")]
    pub non_technical: Vec<String>,
    #[serde(default, deserialize_with = "text_list")]
    pub tools: Vec<String>,
}

/// The learning plan as proposed by the model: plain topic strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreparationRoadmap {
    #[serde(default, deserialize_with = "text_list")]
    pub fundamentals: Vec<String>,
    #[serde(default, deserialize_with = "text_list")]
    pub advanced: Vec<String>,
    #[serde(default, deserialize_with = "text_list")]
    pub projects: Vec<String>,
    #[serde(default, deserialize_with = "text_list")]
    pub interview_topics: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleAnalysis {
    #[serde(default)]
    pub job_overview: JobOverview,
    #[serde(default)]
    pub job_required_skills: RequiredSkills,
    #[serde(default)]
    pub preparation_roadmap: PreparationRoadmap,
}

impl RoleAnalysis {
    /// Builds an analysis from a repaired model reply.
    /// Each section is read on its own; a malformed section becomes empty.
    pub fn from_model_output(mut map: Map<String, Value>) -> Self {
        RoleAnalysis {
            job_overview: section(&mut map, "job_overview"),
            job_required_skills: section(&mut map, "job_required_skills"),
            preparation_roadmap: section(&mut map, "preparation_roadmap"),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == RoleAnalysis::default()
    }
}

fn section<T: Default + serde::de::DeserializeOwned>(map: &mut Map<String, Value>, key: &str) -> T {
    match map.remove(key) {
        None | Some(Value::Null) => T::default(),
        Some(value) => serde_json::from_value(value).unwrap_or_else(|e| {
            warn!("Discarding malformed '{key}' section from role analysis: {e}");
            T::default()
        }),
    }
}

fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn text_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::Null => None,
                Value::String(s) => Some(s),
                other => Some(other.to_string()),
            })
            .collect(),
        Value::String(s) if !s.trim().is_empty() => vec![s],
        _ => Vec::new(),
    })
}
