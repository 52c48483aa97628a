//! Fixed-interval polling for one view
//!
//! Issues the view's GET request(s) on start and then on every tick, and sends
//! the results to the UI as events. A response is never cancelled once issued;
//! its sequence number lets the view discard it if something newer has landed.

use super::core::{EventSender, Sequencer};
use crate::api::RestaurantApi;
use crate::api::error_handler::ErrorHandler;
use crate::events::{Event, View};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Polls the endpoints backing a single view.
#[derive(Clone)]
pub struct Poller {
    view: View,
    api: Arc<dyn RestaurantApi>,
    event_sender: EventSender,
    sequencer: Sequencer,
    interval: Duration,
    error_handler: ErrorHandler,
}

/// A running poller. Dropping the handle does not stop the task; call `stop`.
pub struct PollerHandle {
    view: View,
    poller: Poller,
    shutdown_sender: broadcast::Sender<()>,
    join_handle: JoinHandle<()>,
}

impl Poller {
    pub fn new(
        view: View,
        api: Arc<dyn RestaurantApi>,
        event_sender: EventSender,
        sequencer: Sequencer,
        interval: Duration,
    ) -> Self {
        Self {
            view,
            api,
            event_sender,
            sequencer,
            interval,
            error_handler: ErrorHandler::new(),
        }
    }

    /// Issue one round of requests for this view and report the outcome.
    pub async fn poll_once(&self) {
        let seq = self.sequencer.next();
        self.event_sender
            .send_event(Event::fetch_started(self.view, seq))
            .await;

        let event = match self.view {
            View::Home | View::Dashboard => {
                match futures::future::try_join(self.api.list_tables(), self.api.list_queue())
                    .await
                {
                    Ok((tables, queue)) => Event::snapshot(self.view, seq, tables, queue),
                    Err(e) => Event::fetch_failed(
                        self.view,
                        seq,
                        e.user_message().to_string(),
                        e.to_string(),
                        self.error_handler.classify_error(&e),
                    ),
                }
            }
            View::StaffPanel => match self.api.list_tables().await {
                Ok(tables) => Event::tables(self.view, seq, tables),
                Err(e) => Event::fetch_failed(
                    self.view,
                    seq,
                    e.user_message().to_string(),
                    e.to_string(),
                    self.error_handler.classify_error(&e),
                ),
            },
        };
        self.event_sender.send_event(event).await;
    }

    /// Start polling: one fetch immediately, then one per interval until shutdown.
    pub fn spawn(self) -> PollerHandle {
        let (shutdown_sender, mut shutdown_receiver) = broadcast::channel(1);
        let poller = self.clone();
        let join_handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(poller.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = shutdown_receiver.recv() => break,
                    _ = ticker.tick() => poller.poll_once().await,
                }
            }
        });

        PollerHandle {
            view: self.view,
            poller: self,
            shutdown_sender,
            join_handle,
        }
    }
}

impl PollerHandle {
    pub fn view(&self) -> View {
        self.view
    }

    /// Fetch right away, outside the regular schedule.
    pub fn refresh_now(&self) {
        let poller = self.poller.clone();
        tokio::spawn(async move { poller.poll_once().await });
    }

    /// Stop ticking. A fetch already in flight still completes.
    pub fn stop(self) -> JoinHandle<()> {
        let _ = self.shutdown_sender.send(());
        self.join_handle
    }
}
