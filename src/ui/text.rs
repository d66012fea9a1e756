//! Plain-text rendering of the dashboard for headless mode

use crate::consts::cli_consts::EMPTY_REVIEWS_PLACEHOLDER;
use crate::ui::dashboard::DashboardState;
use std::fmt::Write;

const COLOR_COMPLETED: &str = "\x1b[32m"; // Green
const COLOR_CAUTION: &str = "\x1b[33m"; // Yellow
const COLOR_RESET: &str = "\x1b[0m";

const HEADERS: [&str; 4] = ["Repository", "PR #", "Status", "Date"];

/// Render the three cards and the reviews table as plain text.
///
/// With `ansi` set, status cells are wrapped in colour escape codes.
pub fn render_text(state: &DashboardState, ansi: bool) -> String {
    let metrics = state.metrics();
    let mut out = String::new();

    let _ = writeln!(out, "Total Reviews: {}", metrics.total_reviews);
    let _ = writeln!(out, "Issues Found: {}", metrics.issues_found);
    let _ = writeln!(out, "Avg. Review Time: {}", metrics.avg_review_time);
    out.push('\n');

    let rows: Vec<[String; 4]> = state
        .reviews()
        .iter()
        .map(|r| {
            [
                r.repository.clone(),
                r.pr_label(),
                r.status.clone(),
                r.date.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths)
        .map(|(h, w)| format!("{:<w$}", h, w = w))
        .collect();
    let _ = writeln!(out, "{}", header.join("  ").trim_end());

    if rows.is_empty() {
        let _ = writeln!(out, "{}", EMPTY_REVIEWS_PLACEHOLDER);
        return out;
    }

    for (row, review) in rows.iter().zip(state.reviews()) {
        let cells: Vec<String> = row
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (cell, w))| {
                let padded = format!("{:<w$}", cell, w = w);
                if i == 2 && ansi {
                    let color = if review.is_completed() {
                        COLOR_COMPLETED
                    } else {
                        COLOR_CAUTION
                    };
                    format!("{}{}{}", color, padded, COLOR_RESET)
                } else {
                    padded
                }
            })
            .collect();
        let _ = writeln!(out, "{}", cells.join("  ").trim_end());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MetricsSummary, ReviewRecord};
    use crate::ui::UIConfig;

    fn new_state() -> DashboardState {
        DashboardState::new(UIConfig::new(false, "http://localhost:8000".to_string()))
    }

    #[test]
    fn test_render_text_defaults() {
        let text = render_text(&new_state(), false);
        assert!(text.contains("Total Reviews: 0\n"));
        assert!(text.contains("Issues Found: 0\n"));
        assert!(text.contains("Avg. Review Time: 0s\n"));
        assert!(text.ends_with("No reviews yet\n"));
    }

    #[test]
    fn test_render_text_rows() {
        let mut state = new_state();
        state.replace_metrics(MetricsSummary {
            total_reviews: 124,
            issues_found: 45,
            avg_review_time: "1.2s".to_string(),
        });
        state.replace_reviews(vec![
            ReviewRecord::new("owner/repo-a", 42, "completed", "2023-10-27"),
            ReviewRecord::new("owner/repo-b", 7, "pending", "2023-10-26"),
        ]);

        let text = render_text(&state, false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Total Reviews: 124");
        assert_eq!(
            lines[5].split_whitespace().collect::<Vec<_>>(),
            vec!["owner/repo-a", "#42", "completed", "2023-10-27"]
        );
        assert_eq!(
            lines[6].split_whitespace().collect::<Vec<_>>(),
            vec!["owner/repo-b", "#7", "pending", "2023-10-26"]
        );
        assert!(!text.contains("No reviews yet"));
    }

    #[test]
    fn test_render_text_colours_status() {
        let mut state = new_state();
        state.replace_reviews(vec![
            ReviewRecord::new("owner/repo-a", 42, "completed", "2023-10-27"),
            ReviewRecord::new("owner/repo-c", 8, "failed", "2023-10-25"),
        ]);

        let text = render_text(&state, true);
        assert!(text.contains("\x1b[32mcompleted"));
        assert!(text.contains("\x1b[33mfailed"));
    }
}
