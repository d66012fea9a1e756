use crate::api::error::ApiError;
use crate::models::{MetricsSummary, ReviewRecord};

pub(crate) mod client;
pub use client::ReviewApiClient;
pub mod error;
pub mod sample;
pub use sample::SampleApi;

#[cfg(test)]
use mockall::automock;

/// Read-only source of dashboard data.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReviewApi: Send + Sync {
    /// Address shown in the dashboard header.
    fn base_url(&self) -> &str;

    /// Fetch the aggregate review metrics.
    async fn get_metrics(&self) -> Result<MetricsSummary, ApiError>;

    /// Fetch recent reviews in server order.
    async fn get_reviews(&self) -> Result<Vec<ReviewRecord>, ApiError>;
}
