//! Event System
//!
//! Types and implementations for fetch worker events and logging

use crate::logging::{LogLevel, should_log_with_env};
use crate::models::{MetricsSummary, ReviewRecord};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Worker {
    /// Worker that fetches the metrics summary.
    MetricsFetcher,
    /// Worker that fetches the list of recent reviews.
    ReviewsFetcher,
}

impl Worker {
    /// Name of the data slot this worker fills.
    pub fn label(&self) -> &'static str {
        match self {
            Worker::MetricsFetcher => "metrics",
            Worker::ReviewsFetcher => "reviews",
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
}

/// Data delivered by a successful fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Metrics(MetricsSummary),
    Reviews(Vec<ReviewRecord>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub worker: Worker,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    /// Present only on success events
    pub payload: Option<Payload>,
}

impl Event {
    fn new(worker: Worker, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            worker,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            payload: None,
        }
    }

    pub fn refresh(worker: Worker, msg: String) -> Self {
        Self::new(worker, msg, EventType::Refresh, LogLevel::Info)
    }

    pub fn error(worker: Worker, msg: String, log_level: LogLevel) -> Self {
        Self::new(worker, msg, EventType::Error, log_level)
    }

    pub fn metrics_loaded(metrics: MetricsSummary) -> Self {
        let msg = format!(
            "Loaded metrics: {} reviews, {} issues",
            metrics.total_reviews, metrics.issues_found
        );
        let mut event = Self::new(Worker::MetricsFetcher, msg, EventType::Success, LogLevel::Info);
        event.payload = Some(Payload::Metrics(metrics));
        event
    }

    pub fn reviews_loaded(reviews: Vec<ReviewRecord>) -> Self {
        let msg = format!("Loaded {} reviews", reviews.len());
        let mut event = Self::new(Worker::ReviewsFetcher, msg, EventType::Success, LogLevel::Info);
        event.payload = Some(Payload::Reviews(reviews));
        event
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_events_carry_payload() {
        let event = Event::metrics_loaded(MetricsSummary::default());
        assert_eq!(event.worker, Worker::MetricsFetcher);
        assert_eq!(event.event_type, EventType::Success);
        assert_eq!(
            event.payload,
            Some(Payload::Metrics(MetricsSummary::default()))
        );

        let event = Event::reviews_loaded(Vec::new());
        assert_eq!(event.worker, Worker::ReviewsFetcher);
        assert_eq!(event.msg, "Loaded 0 reviews");
    }

    #[test]
    fn test_error_events_have_no_payload() {
        let event = Event::error(Worker::MetricsFetcher, "boom".to_string(), LogLevel::Warn);
        assert_eq!(event.event_type, EventType::Error);
        assert!(event.payload.is_none());
        assert!(event.should_display());
    }

    #[test]
    fn test_display_format() {
        let event = Event::refresh(Worker::ReviewsFetcher, "Fetching reviews...".to_string());
        let text = event.to_string();
        assert!(text.starts_with("Refresh ["));
        assert!(text.ends_with("] Fetching reviews..."));
    }
}
