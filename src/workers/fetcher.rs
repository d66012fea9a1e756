//! One-shot fetches of the dashboard's two data slots

use super::core::EventSender;
use crate::api::ReviewApi;
use crate::api::error::ApiError;
use crate::error_classifier::ErrorClassifier;
use crate::events::{Event, Worker};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Spawn the metrics and reviews fetches as independent tasks.
///
/// Neither task waits on the other. Each reports through `event_sender` and
/// then exits; once both handles finish, every sender clone has been dropped.
pub fn spawn_fetchers(api: Arc<dyn ReviewApi>, event_sender: EventSender) -> Vec<JoinHandle<()>> {
    let metrics_api = api.clone();
    let metrics_sender = event_sender.clone();
    let metrics_handle = tokio::spawn(async move {
        fetch_metrics(metrics_api.as_ref(), &metrics_sender).await;
    });

    let reviews_handle = tokio::spawn(async move {
        fetch_reviews(api.as_ref(), &event_sender).await;
    });

    vec![metrics_handle, reviews_handle]
}

/// Fetch the metrics summary and report the outcome.
pub async fn fetch_metrics(api: &dyn ReviewApi, event_sender: &EventSender) {
    event_sender
        .send_event(Event::refresh(
            Worker::MetricsFetcher,
            "Fetching metrics...".to_string(),
        ))
        .await;

    match api.get_metrics().await {
        Ok(metrics) => event_sender.send_event(Event::metrics_loaded(metrics)).await,
        Err(e) => report_failure(Worker::MetricsFetcher, "metrics", &e, event_sender).await,
    }
}

/// Fetch the recent reviews and report the outcome.
pub async fn fetch_reviews(api: &dyn ReviewApi, event_sender: &EventSender) {
    event_sender
        .send_event(Event::refresh(
            Worker::ReviewsFetcher,
            "Fetching reviews...".to_string(),
        ))
        .await;

    match api.get_reviews().await {
        Ok(reviews) => event_sender.send_event(Event::reviews_loaded(reviews)).await,
        Err(e) => report_failure(Worker::ReviewsFetcher, "reviews", &e, event_sender).await,
    }
}

async fn report_failure(worker: Worker, what: &str, error: &ApiError, event_sender: &EventSender) {
    let log_level = ErrorClassifier::new().classify_fetch_error(error);
    let msg = format!("Failed to fetch {}: {}", what, error);
    let level: log::Level = log_level.into();
    log::log!(level, "{}", msg);
    event_sender
        .send_event(Event::error(worker, msg, log_level))
        .await;
}
