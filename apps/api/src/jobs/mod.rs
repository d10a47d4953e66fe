// Job postings: ATS-biased search and first-seen-wins extraction.

pub mod extract;
pub mod search;

use serde::{Deserialize, Serialize};

/// A single job opening surfaced by the search provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub company: String,
    pub title: String,
    pub url: String,
}
