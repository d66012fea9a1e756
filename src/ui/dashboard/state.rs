//! Dashboard state management
//!
//! Contains the view-owned state container and the per-slot load status

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::events::Event as WorkerEvent;
use crate::models::{MetricsSummary, ReviewRecord};
use crate::ui::app::UIConfig;

use std::collections::VecDeque;
use std::time::Instant;

/// Load status of one data slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    /// No request issued yet.
    Idle,
    /// Request in flight.
    Loading { started_at: Instant },
    /// Last request succeeded and the slot holds its result.
    Loaded,
    /// Last request failed; the slot keeps its previous value.
    Failed,
}

impl SlotState {
    pub fn label(&self) -> &'static str {
        match self {
            SlotState::Idle => "idle",
            SlotState::Loading { .. } => "loading",
            SlotState::Loaded => "loaded",
            SlotState::Failed => "unavailable",
        }
    }
}

/// State owned by one dashboard view for its whole lifetime.
///
/// The metrics and reviews slots are independent: each is only ever replaced
/// wholesale by its own fetch result.
#[derive(Debug)]
pub struct DashboardState {
    /// Address of the review service, shown in the header.
    pub base_url: String,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<WorkerEvent>,
    /// Activity logs for display
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,

    metrics: MetricsSummary,
    reviews: Vec<ReviewRecord>,
    metrics_state: SlotState,
    reviews_state: SlotState,
}

impl DashboardState {
    /// Creates a new dashboard state with default metrics and no reviews.
    pub fn new(ui_config: UIConfig) -> Self {
        Self {
            base_url: ui_config.base_url,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
            tick: 0,
            metrics: MetricsSummary::default(),
            reviews: Vec::new(),
            metrics_state: SlotState::Idle,
            reviews_state: SlotState::Idle,
        }
    }

    pub fn metrics(&self) -> &MetricsSummary {
        &self.metrics
    }

    pub fn reviews(&self) -> &[ReviewRecord] {
        &self.reviews
    }

    pub fn metrics_state(&self) -> SlotState {
        self.metrics_state
    }

    pub fn reviews_state(&self) -> SlotState {
        self.reviews_state
    }

    /// Replace the metrics slot with a freshly fetched summary.
    pub fn replace_metrics(&mut self, metrics: MetricsSummary) {
        self.metrics = metrics;
        self.metrics_state = SlotState::Loaded;
    }

    /// Replace the reviews slot with a freshly fetched list.
    pub fn replace_reviews(&mut self, reviews: Vec<ReviewRecord>) {
        self.reviews = reviews;
        self.reviews_state = SlotState::Loaded;
    }

    pub fn set_metrics_state(&mut self, state: SlotState) {
        self.metrics_state = state;
    }

    pub fn set_reviews_state(&mut self, state: SlotState) {
        self.reviews_state = state;
    }

    /// Whether both fetches have settled, successfully or not.
    pub fn is_settled(&self) -> bool {
        let settled = |s: SlotState| matches!(s, SlotState::Loaded | SlotState::Failed);
        settled(self.metrics_state) && settled(self.reviews_state)
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: WorkerEvent) {
        self.pending_events.push_back(event);
    }
}
