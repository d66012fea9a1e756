//! Session setup and initialization

use crate::api::ReviewApi;
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::events::Event;
use crate::workers::{EventSender, spawn_fetchers};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Event receiver for worker events
    pub event_receiver: mpsc::Receiver<Event>,
    /// Join handles for the two fetch tasks
    pub join_handles: Vec<JoinHandle<()>>,
    /// Address of the data source, for display
    pub base_url: String,
}

/// Starts both fetches against `api` and returns the view's end of the channel.
///
/// Must be called from within a tokio runtime.
pub fn setup_session(api: Arc<dyn ReviewApi>) -> SessionData {
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let base_url = api.base_url().to_string();
    let join_handles = spawn_fetchers(api, EventSender::new(event_sender));

    SessionData {
        event_receiver,
        join_handles,
        base_url,
    }
}
