//! Plain-text rendering for the one-shot commands.

use crate::models::{QueueEntry, Table};
use std::fmt::Write;

/// One line per table, padded into columns.
pub fn format_tables(tables: &[Table]) -> String {
    if tables.is_empty() {
        return "No tables.".to_string();
    }

    let mut out = format!(
        "{:<6} {:<8} {:>8}  {:<10} {}\n",
        "ID", "TABLE", "CAPACITY", "STATUS", "OCCUPIED SINCE"
    );
    for table in tables {
        let _ = writeln!(
            out,
            "{:<6} {:<8} {:>8}  {:<10} {}",
            table.id,
            table.number,
            table.capacity,
            table.status.as_str(),
            table.occupied_since.as_deref().unwrap_or("-")
        );
    }
    out
}

/// One line per queue entry, in position order as received.
pub fn format_queue(queue: &[QueueEntry]) -> String {
    if queue.is_empty() {
        return "Queue is empty.".to_string();
    }

    let mut out = format!(
        "{:<4} {:<20} {:>5}  {:>9}  {}\n",
        "POS", "NAME", "PARTY", "WAIT(MIN)", "PHONE"
    );
    for entry in queue {
        let _ = writeln!(
            out,
            "{:<4} {:<20} {:>5}  {:>9}  {}",
            entry.position,
            entry.name,
            entry.party_size,
            entry.estimated_wait_time,
            entry.phone.as_deref().unwrap_or("-")
        );
    }
    out
}
