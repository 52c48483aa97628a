//! Queue panel

use crate::models::QueueEntry;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

pub fn render_queue_panel(f: &mut Frame, area: Rect, queue: &[QueueEntry]) {
    let lines: Vec<Line> = if queue.is_empty() {
        vec![Line::from(Span::styled(
            "No customers in queue",
            Style::default().fg(Color::Gray),
        ))]
    } else {
        queue
            .iter()
            .map(|customer| {
                let mut spans = vec![
                    Span::styled(
                        format!("#{} - {}", customer.position, customer.name),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  Party of {}", customer.party_size),
                        Style::default().fg(Color::Gray),
                    ),
                    Span::styled(
                        format!("  {} min", customer.estimated_wait_time),
                        Style::default()
                            .fg(Color::LightMagenta)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(" est. wait", Style::default().fg(Color::DarkGray)),
                ];
                if let Some(phone) = &customer.phone {
                    spans.push(Span::styled(
                        format!("  ☎ {}", phone),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                Line::from(spans)
            })
            .collect()
    };

    let block = Block::default()
        .title(format!("CURRENT QUEUE ({} waiting)", queue.len()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
