//! Records served by the restaurant API.
//!
//! The client trusts the server's JSON shape and performs no validation of its own.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Seating status of a table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
pub enum TableStatus {
    Available,
    Occupied,
    Reserved,
    /// Any status string this client does not know about.
    #[serde(other)]
    Unknown,
}

impl TableStatus {
    /// Statuses a staff member can move a table into.
    pub const SETTABLE: [TableStatus; 3] = [
        TableStatus::Available,
        TableStatus::Occupied,
        TableStatus::Reserved,
    ];

    /// Wire representation, as sent in a status update.
    pub fn as_str(&self) -> &'static str {
        match self {
            TableStatus::Available => "available",
            TableStatus::Occupied => "occupied",
            TableStatus::Reserved => "reserved",
            TableStatus::Unknown => "unknown",
        }
    }
}

impl FromStr for TableStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "available" => Ok(TableStatus::Available),
            "occupied" => Ok(TableStatus::Occupied),
            "reserved" => Ok(TableStatus::Reserved),
            other => Err(format!(
                "unknown table status '{}', expected one of: available, occupied, reserved",
                other
            )),
        }
    }
}

/// A physical seating unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub id: u64,
    /// Display number, e.g. "T4".
    pub number: String,
    pub capacity: u32,
    pub status: TableStatus,
    /// Set by the server while the table is occupied.
    #[serde(default)]
    pub occupied_since: Option<String>,
}

impl Table {
    pub fn is_available(&self) -> bool {
        self.status == TableStatus::Available
    }
}

/// A waiting party and its server-computed wait estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueEntry {
    pub id: u64,
    pub position: u32,
    pub name: String,
    pub party_size: u32,
    /// Estimated wait in minutes.
    pub estimated_wait_time: u32,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Body of a table status change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusUpdate {
    pub status: TableStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_decodes_server_payload() {
        let json = r#"{
            "id": 2,
            "number": "T2",
            "capacity": 4,
            "status": "occupied",
            "occupied_since": "2025-01-01T18:30:00",
            "updated_at": "2025-01-01T18:30:00"
        }"#;
        let table: Table = serde_json::from_str(json).unwrap();
        assert_eq!(table.id, 2);
        assert_eq!(table.number, "T2");
        assert_eq!(table.status, TableStatus::Occupied);
        assert_eq!(table.occupied_since.as_deref(), Some("2025-01-01T18:30:00"));
    }

    #[test]
    fn test_unrecognised_status_does_not_fail_decoding() {
        let json = r#"{"id": 9, "number": "T9", "capacity": 2, "status": "cleaning"}"#;
        let table: Table = serde_json::from_str(json).unwrap();
        assert_eq!(table.status, TableStatus::Unknown);
        assert!(!table.is_available());
    }

    #[test]
    fn test_queue_entry_ignores_extra_fields() {
        let json = r#"{
            "id": 1, "position": 1, "name": "John Doe", "party_size": 4,
            "estimated_wait_time": 15, "joined_at": "2025-01-01T18:00:00", "notified": 0
        }"#;
        let entry: QueueEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.estimated_wait_time, 15);
        assert_eq!(entry.phone, None);
    }

    #[test]
    fn test_status_update_body() {
        let body = StatusUpdate {
            status: TableStatus::Reserved,
        };
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            serde_json::json!({"status": "reserved"})
        );
    }

    #[test]
    fn test_status_parsing_and_display() {
        assert_eq!("Occupied".parse::<TableStatus>(), Ok(TableStatus::Occupied));
        assert!("unknown".parse::<TableStatus>().is_err());
        assert_eq!(TableStatus::Available.to_string(), "Available");
    }
}
