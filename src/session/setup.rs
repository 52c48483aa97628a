//! Session setup and initialization

use crate::api::{RestaurantApi, RestaurantClient};
use crate::config::{Config, RefreshIntervals};
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::environment::Environment;
use crate::events::Event;
use crate::workers::{EventSender, Sequencer};
use std::error::Error;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// API client shared by every worker
    pub api: Arc<dyn RestaurantApi>,
    /// Cloned into pollers and staff actions
    pub event_sender: EventSender,
    /// Event receiver for worker events
    pub event_receiver: mpsc::Receiver<Event>,
    /// Request ordering shared across the session
    pub sequencer: Sequencer,
    /// Polling interval per view
    pub intervals: RefreshIntervals,
    /// Whether to paint the TUI background
    pub with_background_color: bool,
}

/// Builds the API client and event channel used by both modes.
///
/// # Arguments
/// * `environment` - Deployment to talk to
/// * `config` - Loaded configuration file, or its defaults
///
/// # Returns
/// * `Ok(SessionData)` - Successfully set up session
/// * `Err` - The HTTP client could not be built
pub fn setup_session(
    environment: Environment,
    config: &Config,
) -> Result<SessionData, Box<dyn Error>> {
    let client = RestaurantClient::new(environment)?;
    let (sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);

    Ok(SessionData {
        api: Arc::new(client),
        event_sender: EventSender::new(sender),
        event_receiver,
        sequencer: Sequencer::new(),
        intervals: config.refresh_intervals(),
        with_background_color: config.with_background_color,
    })
}
