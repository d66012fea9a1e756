//! Dashboard header component
//!
//! Renders the title, the service address and each slot's load status

use super::super::state::{DashboardState, SlotState};
use super::super::utils::slot_state_color;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1)])
        .split(area);

    let title = Paragraph::new(format!(
        "AI CODE REVIEWER DASHBOARD v{}",
        env!("CARGO_PKG_VERSION")
    ))
    .alignment(Alignment::Center)
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick),
    );
    f.render_widget(title, header_chunks[0]);

    let mut spans = vec![
        Span::styled("Source: ", Style::default().fg(Color::Gray)),
        Span::styled(state.base_url.clone(), Style::default().fg(Color::White)),
    ];
    spans.extend(slot_spans("Metrics", state.metrics_state(), state.tick));
    spans.extend(slot_spans("Reviews", state.reviews_state(), state.tick));

    let status = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(status, header_chunks[1]);
}

fn slot_spans(name: &str, slot: SlotState, tick: usize) -> Vec<Span<'static>> {
    let label = match slot {
        SlotState::Loading { .. } => format!("{} {}", slot.label(), SPINNER[tick % SPINNER.len()]),
        _ => slot.label().to_string(),
    };
    vec![
        Span::styled(format!("  {}: ", name), Style::default().fg(Color::Gray)),
        Span::styled(label, Style::default().fg(slot_state_color(slot))),
    ]
}
