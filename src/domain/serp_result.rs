use chrono::{DateTime, Utc};
use serde::Serialize;

use super::search_job::{SearchJob, SearchParams};

pub const SOURCE_GOOGLE: &str = "Google";

/// One finished search run, ready for persistence. Immutable once built.
#[derive(Debug, Serialize)]
pub struct SerpResult {
    pub query: String,
    pub source: String,
    pub extra_params: SearchParams,
    pub links: Vec<String>,
    pub gen_timestamp: DateTime<Utc>,
}

impl SerpResult {
    pub fn new(job: &SearchJob, links: Vec<String>) -> Self {
        SerpResult {
            query: job.query.clone(),
            source: SOURCE_GOOGLE.to_string(),
            extra_params: job.params.clone(),
            links,
            gen_timestamp: Utc::now(),
        }
    }
}
