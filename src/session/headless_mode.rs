//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::events::{Event, Payload, View};
use crate::ui::home::HomeStats;
use crate::workers::Poller;
use std::error::Error;

/// Line printed after a successful Home snapshot.
fn home_summary(event: &Event) -> Option<String> {
    match (&event.view, &event.payload) {
        (View::Home, Some(Payload::Snapshot { tables, queue })) => {
            Some(HomeStats::from_lists(tables, queue).to_string())
        }
        _ => None,
    }
}

/// Runs the application in headless mode
///
/// Polls a single view and logs its events to the console until Ctrl+C.
///
/// # Arguments
/// * `session` - Session data from setup
/// * `view` - The view whose endpoints are polled
pub async fn run_headless_mode(mut session: SessionData, view: View) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", session.api.environment());

    let interval = match view {
        View::Home => session.intervals.home,
        View::Dashboard => session.intervals.dashboard,
        View::StaffPanel => session.intervals.staff,
    };
    let handle = Poller::new(
        view,
        session.api.clone(),
        session.event_sender.clone(),
        session.sequencer.clone(),
        interval,
    )
    .spawn();

    // Event loop: log events to console until shutdown
    loop {
        tokio::select! {
            Some(event) = session.event_receiver.recv() => {
                if event.should_display() {
                    println!("{}", event);
                }
                if let Some(summary) = home_summary(&event) {
                    println!("{}", summary);
                }
            }
            _ = tokio::signal::ctrl_c() => {
                break;
            }
        }
    }

    print_session_shutdown();
    let _ = handle.stop().await;
    print_session_exit_success();

    Ok(())
}
