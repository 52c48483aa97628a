//! UI utility functions
//!
//! Helpers shared by the screen renderers

use crate::events::{EventType, View};
use crate::models::TableStatus;
use ratatui::prelude::Color;

/// Badge colour for a table status.
pub fn status_color(status: TableStatus) -> Color {
    match status {
        TableStatus::Available => Color::Green,
        TableStatus::Occupied => Color::Red,
        TableStatus::Reserved => Color::Yellow,
        TableStatus::Unknown => Color::DarkGray,
    }
}

/// Colour for an activity log line, by the view that produced it.
pub fn view_color(view: View) -> Color {
    match view {
        View::Home => Color::Cyan,
        View::Dashboard => Color::LightBlue,
        View::StaffPanel => Color::Magenta,
    }
}

pub fn event_icon(event_type: EventType) -> &'static str {
    match event_type {
        EventType::Success => "✅",
        EventType::Error => "❌",
        EventType::Action => "🛠",
        EventType::Refresh => "",
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    timestamp.to_string()
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    if msg.contains("Reqwest error") && msg.contains("timed out") {
        return msg
            .split(": Reqwest error")
            .next()
            .map(|prefix| format!("{}: request timed out", prefix))
            .unwrap_or_else(|| "Request timed out".to_string());
    }
    if msg.contains("Reqwest error") {
        return msg
            .split(": Reqwest error")
            .next()
            .map(|prefix| format!("{}: API unreachable", prefix))
            .unwrap_or_else(|| "API unreachable".to_string());
    }
    msg.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(format_compact_timestamp("2025-03-14 18:45:09"), "03-14 18:45");
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn test_clean_http_error_message() {
        let msg = "Error fetching Home data: Reqwest error: error sending request for url";
        assert_eq!(
            clean_http_error_message(msg),
            "Error fetching Home data: API unreachable"
        );
        assert_eq!(clean_http_error_message("plain"), "plain");
    }

    #[test]
    fn test_status_colors_are_distinct() {
        assert_ne!(
            status_color(TableStatus::Available),
            status_color(TableStatus::Occupied)
        );
        assert_ne!(
            status_color(TableStatus::Occupied),
            status_color(TableStatus::Reserved)
        );
    }
}
