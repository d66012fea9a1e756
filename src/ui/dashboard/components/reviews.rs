//! Dashboard reviews table
//!
//! Renders recent reviews in server order

use super::super::state::DashboardState;
use super::super::utils::status_style;
use crate::consts::cli_consts::EMPTY_REVIEWS_PLACEHOLDER;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table};

const COLUMN_TITLES: [&str; 4] = ["Repository", "PR #", "Status", "Date"];

/// Rows between the top of the table and the first record: header plus its margin.
const HEADER_HEIGHT: u16 = 2;

fn column_widths() -> [Constraint; 4] {
    [
        Constraint::Fill(1),
        Constraint::Length(8),
        Constraint::Length(12),
        Constraint::Length(12),
    ]
}

/// Render the reviews table, or a placeholder row when there are none.
pub fn render_reviews_table(f: &mut Frame, area: Rect, state: &DashboardState) {
    let reviews = state.reviews();

    let block = Block::default()
        .title("RECENT REVIEWS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);

    let header = Row::new(COLUMN_TITLES)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows: Vec<Row> = reviews
        .iter()
        .map(|review| {
            Row::new(vec![
                Cell::from(review.repository.as_str()),
                Cell::from(review.pr_label()),
                Cell::from(review.status.as_str()).style(status_style(&review.status)),
                Cell::from(review.date.as_str()),
            ])
        })
        .collect();

    let table = Table::new(rows, column_widths())
        .header(header)
        .block(block);
    f.render_widget(table, area);

    // A table row cannot span columns, so the placeholder is drawn over the
    // full inner width where the first row would be.
    if reviews.is_empty() && inner.height > HEADER_HEIGHT {
        let placeholder_area = Rect {
            x: inner.x,
            y: inner.y + HEADER_HEIGHT,
            width: inner.width,
            height: 1,
        };
        let placeholder = Paragraph::new(EMPTY_REVIEWS_PLACEHOLDER)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(placeholder, placeholder_area);
    }
}
