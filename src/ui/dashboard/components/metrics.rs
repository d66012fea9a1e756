//! Dashboard metrics cards
//!
//! Renders the three summary cards

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the total reviews, issues found and average review time cards.
pub fn render_metrics_section(f: &mut Frame, area: Rect, state: &DashboardState) {
    let metrics = state.metrics();

    let card_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    render_card(
        f,
        card_chunks[0],
        "Total Reviews",
        metrics.total_reviews.to_string(),
        Color::LightBlue,
    );
    render_card(
        f,
        card_chunks[1],
        "Issues Found",
        metrics.issues_found.to_string(),
        Color::LightRed,
    );
    render_card(
        f,
        card_chunks[2],
        "Avg. Review Time",
        metrics.avg_review_time.clone(),
        Color::LightGreen,
    );
}

fn render_card(f: &mut Frame, area: Rect, title: &str, value: String, color: Color) {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    // Vertically centre the value inside the card
    let inner_height = area.height.saturating_sub(2);
    let top_padding = inner_height.saturating_sub(1) / 2;
    let mut lines = vec![ratatui::text::Line::raw(""); top_padding as usize];
    lines.push(ratatui::text::Line::raw(value));

    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(block);
    f.render_widget(card, area);
}
