use std::collections::HashSet;

use crate::jobs::JobPosting;
use crate::search::SearchResult;

/// Postings kept per request.
pub const DEFAULT_JOB_LIMIT: usize = 5;

/// Company name as it appears before the first hyphen of a posting title.
pub fn company_from_title(title: &str) -> &str {
    title.split('-').next().unwrap_or(title).trim()
}

/// Filters raw results into at most `limit` postings, one per company.
///
/// Results with a blank title or url are skipped. Companies are compared
/// case-insensitively and the first posting seen for a company wins, so a
/// second opening at the same company is dropped.
pub fn extract_top_jobs(results: &[SearchResult], limit: usize) -> Vec<JobPosting> {
    let mut jobs = Vec::new();
    let mut seen_companies = HashSet::new();

    for result in results {
        if jobs.len() >= limit {
            break;
        }

        let title = result.title.trim();
        let url = result.url.trim();
        if title.is_empty() || url.is_empty() {
            continue;
        }

        let company = company_from_title(title);
        if !seen_companies.insert(company.to_lowercase()) {
            continue;
        }

        jobs.push(JobPosting {
            company: company.to_string(),
            title: title.to_string(),
            url: url.to_string(),
        });
    }

    jobs
}
