//! Review service data model
//!
//! Values returned by the `/metrics` and `/reviews` endpoints.

use crate::consts::cli_consts::COMPLETED_STATUS;
use serde::{Deserialize, Serialize};

/// Aggregate counters describing review activity.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MetricsSummary {
    pub total_reviews: u64,
    pub issues_found: u64,
    /// Free-form display string, e.g. "1.2s".
    pub avg_review_time: String,
}

impl Default for MetricsSummary {
    fn default() -> Self {
        Self {
            total_reviews: 0,
            issues_found: 0,
            avg_review_time: "0s".to_string(),
        }
    }
}

/// One reviewed pull request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReviewRecord {
    /// "owner/name"
    pub repository: String,
    pub pr_number: u64,
    pub status: String,
    pub date: String,
}

impl ReviewRecord {
    pub fn new(repository: &str, pr_number: u64, status: &str, date: &str) -> Self {
        Self {
            repository: repository.to_string(),
            pr_number,
            status: status.to_string(),
            date: date.to_string(),
        }
    }

    /// Whether the review finished successfully. Any other status is
    /// treated as still in need of attention.
    pub fn is_completed(&self) -> bool {
        self.status == COMPLETED_STATUS
    }

    /// PR number as shown in the table, e.g. "#42".
    pub fn pr_label(&self) -> String {
        format!("#{}", self.pr_number)
    }
}
