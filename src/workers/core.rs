//! Core worker utilities

use crate::events::Event;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::mpsc;

/// Common event sending utilities for workers
#[derive(Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Send an event. A closed receiver means the UI is gone, so the event is dropped.
    pub async fn send_event(&self, event: Event) {
        let _ = self.sender.send(event).await;
    }
}

/// Hands out request sequence numbers in issue order, shared by every worker.
#[derive(Debug, Clone, Default)]
pub struct Sequencer {
    counter: Arc<AtomicU64>,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next sequence number. The first call returns 1.
    pub fn next(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Most recently issued sequence number, 0 if none.
    pub fn current(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }
}

/// Tracks the newest applied response so an older, slower one cannot overwrite it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceGuard {
    last_applied: u64,
}

impl SequenceGuard {
    /// A guard that ignores everything issued up to and including `seq`.
    pub fn after(seq: u64) -> Self {
        Self { last_applied: seq }
    }

    /// Returns true and records `seq` if it is newer than anything applied so far.
    pub fn admit(&mut self, seq: u64) -> bool {
        if seq <= self.last_applied {
            return false;
        }
        self.last_applied = seq;
        true
    }
}
