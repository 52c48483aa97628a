//! Event System
//!
//! Messages sent from polling and action workers to the UI loop, doubling as
//! activity log entries.

use crate::logging::{LogLevel, should_log_with_env};
use crate::models::{QueueEntry, Table};
use chrono::Local;
use std::fmt::Display;

/// The polling view an event belongs to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum View {
    Home,
    Dashboard,
    StaffPanel,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    Action,
}

/// Data carried to the view state, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// A fetch was issued.
    FetchStarted,
    /// Tables and queue fetched together.
    Snapshot {
        tables: Vec<Table>,
        queue: Vec<QueueEntry>,
    },
    /// Table list fetched on its own.
    Tables(Vec<Table>),
    /// The fetch failed; carries the user-facing message.
    FetchFailed(String),
    /// A status change on this table finished, whatever its outcome.
    UpdateFinished(u64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub view: View,
    /// Issue order of the request that produced this event; 0 when not a fetch result.
    pub seq: u64,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    pub payload: Option<Payload>,
}

impl Event {
    fn new(view: View, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            view,
            seq: 0,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            payload: None,
        }
    }

    fn with_payload(mut self, seq: u64, payload: Payload) -> Self {
        self.seq = seq;
        self.payload = Some(payload);
        self
    }

    /// Plain activity log entry.
    pub fn log(view: View, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(view, msg, event_type, log_level)
    }

    pub fn fetch_started(view: View, seq: u64) -> Self {
        Self::new(
            view,
            format!("Refreshing {} data", view),
            EventType::Refresh,
            LogLevel::Debug,
        )
        .with_payload(seq, Payload::FetchStarted)
    }

    pub fn snapshot(view: View, seq: u64, tables: Vec<Table>, queue: Vec<QueueEntry>) -> Self {
        Self::new(
            view,
            format!(
                "Fetched {} tables and {} queue entries",
                tables.len(),
                queue.len()
            ),
            EventType::Success,
            LogLevel::Debug,
        )
        .with_payload(seq, Payload::Snapshot { tables, queue })
    }

    pub fn tables(view: View, seq: u64, tables: Vec<Table>) -> Self {
        Self::new(
            view,
            format!("Fetched {} tables", tables.len()),
            EventType::Success,
            LogLevel::Debug,
        )
        .with_payload(seq, Payload::Tables(tables))
    }

    pub fn fetch_failed(
        view: View,
        seq: u64,
        user_message: String,
        detail: String,
        log_level: LogLevel,
    ) -> Self {
        Self::new(
            view,
            format!("Error fetching {} data: {}", view, detail),
            EventType::Error,
            log_level,
        )
        .with_payload(seq, Payload::FetchFailed(user_message))
    }

    pub fn update_finished(table_id: u64) -> Self {
        Self::new(
            View::StaffPanel,
            format!("Table {} update finished", table_id),
            EventType::Action,
            LogLevel::Debug,
        )
        .with_payload(0, Payload::UpdateFinished(table_id))
    }

    pub fn should_display(&self) -> bool {
        // Always show successful actions and info level events
        if self.event_type == EventType::Action && self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_event_carries_payload_and_seq() {
        let event = Event::snapshot(View::Home, 4, Vec::new(), Vec::new());
        assert_eq!(event.seq, 4);
        assert_eq!(event.event_type, EventType::Success);
        assert_eq!(
            event.payload,
            Some(Payload::Snapshot {
                tables: Vec::new(),
                queue: Vec::new()
            })
        );
    }

    #[test]
    fn test_error_events_are_displayed() {
        let event = Event::fetch_failed(
            View::StaffPanel,
            1,
            "Failed to fetch data".to_string(),
            "connection refused".to_string(),
            LogLevel::Warn,
        );
        assert!(event.should_display());
        assert!(event.to_string().contains("connection refused"));
    }
}
