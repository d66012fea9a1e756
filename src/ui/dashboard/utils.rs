//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use super::state::SlotState;
use crate::consts::cli_consts::COMPLETED_STATUS;
use crate::events::Worker;
use ratatui::prelude::{Color, Style};

/// Affirmative colour for completed reviews.
pub const COMPLETED_COLOR: Color = Color::Green;

/// Cautionary colour for every other review status.
pub const CAUTION_COLOR: Color = Color::Yellow;

/// Style of the status cell in the reviews table
pub fn status_style(status: &str) -> Style {
    if status == COMPLETED_STATUS {
        Style::default().fg(COMPLETED_COLOR)
    } else {
        Style::default().fg(CAUTION_COLOR)
    }
}

/// Get a ratatui color for a worker based on its type
pub fn get_worker_color(worker: &Worker) -> Color {
    match worker {
        Worker::MetricsFetcher => Color::Cyan,
        Worker::ReviewsFetcher => Color::LightBlue,
    }
}

/// Colour used for a slot's load status in the header
pub fn slot_state_color(state: SlotState) -> Color {
    match state {
        SlotState::Idle => Color::DarkGray,
        SlotState::Loading { .. } => Color::LightBlue,
        SlotState::Loaded => Color::Green,
        SlotState::Failed => Color::Red,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some((date_part, time_part)) = timestamp.split_once(' ') {
        if let (Some(month_day), Some(hour_min_sec)) = (date_part.get(5..10), time_part.get(0..8)) {
            return format!("{} {}", month_day, hour_min_sec);
        }
    }
    timestamp.to_string()
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    if msg.contains("Reqwest error") && msg.contains("error sending request") {
        if let Some((prefix, _)) = msg.split_once(':') {
            return format!("{}: service unreachable", prefix);
        }
    }
    msg.to_string()
}
