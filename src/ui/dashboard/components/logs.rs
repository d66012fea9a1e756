//! Dashboard logs panel component
//!
//! Renders the diagnostic activity log, one line per fetch event tagged with
//! the slot it belongs to

use super::super::state::DashboardState;
use super::super::utils::{clean_http_error_message, format_compact_timestamp, get_worker_color};
use crate::events::{Event as WorkerEvent, EventType};
use crate::logging::LogLevel;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Width of the slot column, long enough for "metrics" and "reviews".
const SLOT_LABEL_WIDTH: usize = 7;

fn outcome_span(event: &WorkerEvent) -> Span<'static> {
    let (marker, color) = match event.event_type {
        EventType::Refresh => ("..", Color::DarkGray),
        EventType::Success => ("ok", Color::Green),
        EventType::Error if event.log_level >= LogLevel::Error => ("!!", Color::Red),
        EventType::Error => ("!", Color::Yellow),
    };
    Span::styled(format!("{:<3}", marker), Style::default().fg(color))
}

/// `<time> <slot> <outcome> <message>`
fn event_line(event: &WorkerEvent) -> Line<'static> {
    let slot_color = get_worker_color(&event.worker);
    Line::from(vec![
        Span::styled(
            format!("{} ", format_compact_timestamp(&event.timestamp)),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("{:<w$} ", event.worker.label(), w = SLOT_LABEL_WIDTH),
            Style::default().fg(slot_color).add_modifier(Modifier::BOLD),
        ),
        outcome_span(event),
        Span::styled(
            clean_http_error_message(&event.msg),
            Style::default().fg(slot_color),
        ),
    ])
}

/// Render the activity log, newest event first.
pub fn render_logs_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    // Borders plus one row of padding on each side
    let capacity = (area.height.saturating_sub(4) as usize).max(1);

    let lines: Vec<Line> = state
        .activity_logs
        .iter()
        .rev()
        .filter(|event| event.should_display())
        .take(capacity)
        .map(event_line)
        .collect();

    let paragraph = if lines.is_empty() {
        Paragraph::new("Waiting for fetches...").style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(lines)
    };

    let block = Block::default()
        .title("ACTIVITY LOG")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    f.render_widget(paragraph.block(block).wrap(Wrap { trim: true }), area);
}
