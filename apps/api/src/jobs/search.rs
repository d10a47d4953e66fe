use tracing::info;

use crate::search::{SearchError, SearchProvider, SearchRequest, SearchResult};

/// Results requested from the provider before extraction narrows them down.
pub const JOB_SEARCH_MAX_RESULTS: usize = 15;

/// Applicant-tracking-system hosts the query is constrained to.
pub const JOB_BOARD_SITES: [&str; 4] = [
    "greenhouse.io",
    "lever.co",
    "workdayjobs.com",
    "smartrecruiters.com",
];

pub fn job_search_query(role: &str, location: &str) -> String {
    let sites = JOB_BOARD_SITES
        .iter()
        .map(|site| format!("site:{site}"))
        .collect::<Vec<_>>()
        .join(" OR ");
    format!("{role} {location} {sites}")
}

/// Fetches raw job-board results for `role` in `location`.
pub async fn search_jobs(
    role: &str,
    location: &str,
    search: &dyn SearchProvider,
) -> Result<Vec<SearchResult>, SearchError> {
    let request = SearchRequest::basic(job_search_query(role, location), JOB_SEARCH_MAX_RESULTS);
    let response = search.search(&request).await?;
    info!(
        "Job search for {role:?} in {location:?} returned {} results",
        response.results.len()
    );
    Ok(response.results)
}
