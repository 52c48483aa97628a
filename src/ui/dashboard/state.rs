//! Dashboard state management

use crate::events::{Event, Payload};
use crate::models::{QueueEntry, Table};
use crate::workers::SequenceGuard;

/// What the dashboard should currently show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardPhase<'a> {
    Loading,
    Failed(&'a str),
    Ready,
}

#[derive(Debug, Clone)]
pub struct DashboardState {
    pub tables: Vec<Table>,
    pub queue: Vec<QueueEntry>,
    /// A fetch is in flight.
    pub loading: bool,
    /// Message from the last failed fetch; cleared by the next success.
    pub error: Option<String>,
    guard: SequenceGuard,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(SequenceGuard::default())
    }
}

impl DashboardState {
    pub fn new(guard: SequenceGuard) -> Self {
        Self {
            tables: Vec::new(),
            queue: Vec::new(),
            loading: true,
            error: None,
            guard,
        }
    }

    pub fn apply(&mut self, event: &Event) {
        match &event.payload {
            Some(Payload::FetchStarted) => self.loading = true,
            Some(Payload::Snapshot { tables, queue }) => {
                if self.guard.admit(event.seq) {
                    self.tables = tables.clone();
                    self.queue = queue.clone();
                    self.error = None;
                    self.loading = false;
                }
            }
            Some(Payload::FetchFailed(message)) => {
                if self.guard.admit(event.seq) {
                    self.error = Some(message.clone());
                    self.loading = false;
                }
            }
            _ => {}
        }
    }

    /// The loading placeholder wins while nothing has been fetched yet, then the error page.
    pub fn phase(&self) -> DashboardPhase<'_> {
        if self.loading && self.tables.is_empty() {
            DashboardPhase::Loading
        } else if let Some(error) = &self.error {
            DashboardPhase::Failed(error)
        } else {
            DashboardPhase::Ready
        }
    }
}
