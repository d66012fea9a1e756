//! Dashboard state update logic
//!
//! Applies fetch events to the view state

use super::state::{DashboardState, SlotState};

use crate::events::{Event as WorkerEvent, EventType, Payload, Worker};

use std::time::Instant;

impl DashboardState {
    /// Advance one frame and apply all queued events in arrival order.
    pub fn update(&mut self) {
        self.tick += 1;

        while let Some(event) = self.pending_events.pop_front() {
            self.process_event(&event);
            self.add_to_activity_log(event);
        }
    }

    /// Process a single event and update the matching slot
    fn process_event(&mut self, event: &WorkerEvent) {
        match event.event_type {
            EventType::Refresh => {
                let loading = SlotState::Loading {
                    started_at: Instant::now(),
                };
                match event.worker {
                    Worker::MetricsFetcher => self.set_metrics_state(loading),
                    Worker::ReviewsFetcher => self.set_reviews_state(loading),
                }
            }
            EventType::Error => match event.worker {
                Worker::MetricsFetcher => self.set_metrics_state(SlotState::Failed),
                Worker::ReviewsFetcher => self.set_reviews_state(SlotState::Failed),
            },
            EventType::Success => match &event.payload {
                Some(Payload::Metrics(metrics)) => self.replace_metrics(metrics.clone()),
                Some(Payload::Reviews(reviews)) => self.replace_reviews(reviews.clone()),
                None => {}
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogLevel;
    use crate::models::{MetricsSummary, ReviewRecord};
    use crate::ui::app::UIConfig;

    fn new_state() -> DashboardState {
        DashboardState::new(UIConfig::new(false, "http://localhost:8000".to_string()))
    }

    fn loaded_metrics() -> MetricsSummary {
        MetricsSummary {
            total_reviews: 124,
            issues_found: 45,
            avg_review_time: "1.2s".to_string(),
        }
    }

    #[test]
    fn test_initial_state_is_default() {
        let state = new_state();
        assert_eq!(state.metrics(), &MetricsSummary::default());
        assert!(state.reviews().is_empty());
        assert_eq!(state.metrics_state(), SlotState::Idle);
        assert_eq!(state.reviews_state(), SlotState::Idle);
    }

    #[test]
    fn test_refresh_marks_slot_loading() {
        let mut state = new_state();
        state.add_event(WorkerEvent::refresh(
            Worker::MetricsFetcher,
            "Fetching metrics...".to_string(),
        ));
        state.update();
        assert!(matches!(state.metrics_state(), SlotState::Loading { .. }));
        assert_eq!(state.reviews_state(), SlotState::Idle);
    }

    #[test]
    fn test_success_replaces_only_its_slot() {
        let mut state = new_state();
        state.add_event(WorkerEvent::metrics_loaded(loaded_metrics()));
        state.update();

        assert_eq!(state.metrics(), &loaded_metrics());
        assert_eq!(state.metrics_state(), SlotState::Loaded);
        assert!(state.reviews().is_empty());
        assert_eq!(state.reviews_state(), SlotState::Idle);
    }

    #[test]
    fn test_failure_keeps_default_metrics() {
        let mut state = new_state();
        state.add_event(WorkerEvent::error(
            Worker::MetricsFetcher,
            "Failed to fetch metrics: connection refused".to_string(),
            LogLevel::Warn,
        ));
        state.update();

        assert_eq!(state.metrics(), &MetricsSummary::default());
        assert_eq!(state.metrics_state(), SlotState::Failed);
        assert_eq!(state.activity_logs.len(), 1);
    }

    #[test]
    fn test_failure_keeps_previous_reviews() {
        let mut state = new_state();
        let reviews = vec![ReviewRecord::new("owner/repo-a", 42, "completed", "2023-10-27")];
        state.add_event(WorkerEvent::reviews_loaded(reviews.clone()));
        state.update();

        state.add_event(WorkerEvent::error(
            Worker::ReviewsFetcher,
            "Failed to fetch reviews".to_string(),
            LogLevel::Warn,
        ));
        state.update();

        assert_eq!(state.reviews(), reviews.as_slice());
        assert_eq!(state.reviews_state(), SlotState::Failed);
    }

    #[test]
    fn test_wholesale_replacement_does_not_merge() {
        let mut state = new_state();
        state.replace_reviews(vec![
            ReviewRecord::new("owner/a", 1, "completed", "d1"),
            ReviewRecord::new("owner/b", 2, "pending", "d2"),
        ]);
        state.replace_reviews(vec![ReviewRecord::new("owner/c", 3, "failed", "d3")]);

        assert_eq!(state.reviews().len(), 1);
        assert_eq!(state.reviews()[0].repository, "owner/c");
    }

    #[test]
    fn test_settled_after_both_slots_resolve() {
        let mut state = new_state();
        state.add_event(WorkerEvent::metrics_loaded(loaded_metrics()));
        state.update();
        assert!(!state.is_settled());

        state.add_event(WorkerEvent::error(
            Worker::ReviewsFetcher,
            "Failed to fetch reviews".to_string(),
            LogLevel::Warn,
        ));
        state.update();
        assert!(state.is_settled());
    }

    #[test]
    fn test_activity_log_is_bounded() {
        let mut state = new_state();
        for _ in 0..(crate::consts::cli_consts::MAX_ACTIVITY_LOGS + 5) {
            state.add_event(WorkerEvent::refresh(
                Worker::ReviewsFetcher,
                "Fetching reviews...".to_string(),
            ));
        }
        state.update();
        assert_eq!(
            state.activity_logs.len(),
            crate::consts::cli_consts::MAX_ACTIVITY_LOGS
        );
    }
}
