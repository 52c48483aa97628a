//! Activity log panel component

use crate::events::Event;
use crate::ui::utils::{clean_http_error_message, event_icon, format_compact_timestamp, view_color};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use std::collections::VecDeque;

/// Render the most recent activity, newest first.
pub fn render_logs_panel(f: &mut Frame, area: Rect, activity_logs: &VecDeque<Event>) {
    // Leave room for the borders
    let log_count = (area.height.saturating_sub(2) as usize).max(1);

    let log_lines: Vec<Line> = activity_logs
        .iter()
        .rev()
        .take(log_count)
        .map(|event| {
            Line::from(vec![
                Span::raw(format!("{} ", event_icon(event.event_type))),
                Span::styled(
                    format!("{} ", format_compact_timestamp(&event.timestamp)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    clean_http_error_message(&event.msg),
                    Style::default().fg(view_color(event.view)),
                ),
            ])
        })
        .collect();

    let log_paragraph = if log_lines.is_empty() {
        Paragraph::new(vec![Line::from("No activity yet")])
    } else {
        Paragraph::new(log_lines)
    };

    let logs_block = Block::default()
        .title("ACTIVITY LOG")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    f.render_widget(log_paragraph.block(logs_block).wrap(Wrap { trim: true }), area);
}
