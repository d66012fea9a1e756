//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::FRAME_INTERVAL_MS;
use crate::events::Event as WorkerEvent;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Terminal, backend::Backend};
use std::time::Duration;
use tokio::sync::mpsc;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub base_url: String,
}

impl UIConfig {
    pub fn new(with_background_color: bool, base_url: String) -> Self {
        Self {
            with_background_color,
            base_url,
        }
    }
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// State of the single dashboard view.
    state: DashboardState,

    /// Receives events from the fetch workers.
    event_receiver: mpsc::Receiver<WorkerEvent>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(event_receiver: mpsc::Receiver<WorkerEvent>, ui_config: UIConfig) -> Self {
        Self {
            state: DashboardState::new(ui_config),
            event_receiver,
        }
    }

    /// Moves every event already delivered by the workers into the view state.
    fn drain_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.state.add_event(event);
        }
    }
}

/// Runs the dashboard until the user quits.
///
/// Dropping `app` on return closes the event channel, so results still in
/// flight are discarded by the workers.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    loop {
        app.drain_events();
        app.state.update();
        terminal.draw(|f| render_dashboard(f, &app.state))?;

        // Poll for key events
        if event::poll(Duration::from_millis(FRAME_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    return Ok(());
                }
            }
        }
    }
}
