//! Hard-coded sample data source
//!
//! Used with `--sample-data` to preview the dashboard without a running service.
//! Never used as a fallback for a failing live fetch.

use crate::api::ReviewApi;
use crate::api::error::ApiError;
use crate::models::{MetricsSummary, ReviewRecord};

const SAMPLE_SOURCE: &str = "sample data";

#[derive(Debug, Clone, Default)]
pub struct SampleApi;

impl SampleApi {
    pub fn new() -> Self {
        Self
    }

    pub fn metrics() -> MetricsSummary {
        MetricsSummary {
            total_reviews: 124,
            issues_found: 45,
            avg_review_time: "1.2s".to_string(),
        }
    }

    pub fn reviews() -> Vec<ReviewRecord> {
        vec![
            ReviewRecord::new("owner/repo-a", 42, "completed", "2023-10-27"),
            ReviewRecord::new("owner/repo-b", 15, "pending", "2023-10-26"),
            ReviewRecord::new("owner/repo-c", 8, "failed", "2023-10-25"),
        ]
    }
}

#[async_trait::async_trait]
impl ReviewApi for SampleApi {
    fn base_url(&self) -> &str {
        SAMPLE_SOURCE
    }

    async fn get_metrics(&self) -> Result<MetricsSummary, ApiError> {
        Ok(Self::metrics())
    }

    async fn get_reviews(&self) -> Result<Vec<ReviewRecord>, ApiError> {
        Ok(Self::reviews())
    }
}
