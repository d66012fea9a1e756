//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::events::Event;
use crate::ui::UIConfig;
use crate::ui::dashboard::DashboardState;
use crate::ui::text::render_text;
use std::error::Error;
use std::io::IsTerminal;

/// Runs the fetches without a terminal UI.
///
/// Each event is printed as it arrives. Once both fetches have settled, or
/// on Ctrl+C, the final view is printed as plain text. Status colours are
/// only emitted when stdout is a terminal.
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.base_url);

    let mut state = DashboardState::new(UIConfig::new(false, session.base_url.clone()));

    let mut interrupted = false;
    loop {
        tokio::select! {
            maybe_event = session.event_receiver.recv() => {
                match maybe_event {
                    Some(event) => {
                        if event.should_display() {
                            println!("{}", event);
                        }
                        if apply_event(&mut state, event) {
                            break;
                        }
                    }
                    // Every worker has dropped its sender
                    None => break,
                }
            }
            _ = tokio::signal::ctrl_c() => {
                interrupted = true;
                break;
            }
        }
    }

    println!();
    print!("{}", render_text(&state, std::io::stdout().is_terminal()));
    println!();

    print_session_shutdown();
    if !interrupted {
        futures::future::join_all(session.join_handles).await;
    }
    print_session_exit_success();

    Ok(())
}

/// Apply one event to the view. Returns true once both slots have settled.
fn apply_event(state: &mut DashboardState, event: Event) -> bool {
    state.add_event(event);
    state.update();
    state.is_settled()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Worker;
    use crate::logging::LogLevel;
    use crate::models::MetricsSummary;

    #[test]
    fn test_apply_event_settles_after_both_slots_report() {
        let mut state = DashboardState::new(UIConfig::new(
            false,
            "http://localhost:8000".to_string(),
        ));

        assert!(!apply_event(
            &mut state,
            Event::refresh(Worker::MetricsFetcher, "Fetching metrics...".to_string()),
        ));
        assert!(!apply_event(
            &mut state,
            Event::metrics_loaded(MetricsSummary::default()),
        ));
        assert!(!apply_event(
            &mut state,
            Event::refresh(Worker::ReviewsFetcher, "Fetching reviews...".to_string()),
        ));
        assert!(apply_event(
            &mut state,
            Event::error(
                Worker::ReviewsFetcher,
                "Failed to fetch reviews".to_string(),
                LogLevel::Warn,
            ),
        ));
        assert!(state.pending_events.is_empty());
        assert_eq!(state.activity_logs.len(), 4);
    }
}
