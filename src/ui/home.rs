//! Home screen
//!
//! Aggregate stats over the table list and the queue.

use crate::environment::Environment;
use crate::events::{Event, Payload};
use crate::models::{QueueEntry, Table};
use crate::ui::components::header::render_header;
use crate::workers::SequenceGuard;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HomeStats {
    pub available_tables: usize,
    pub total_tables: usize,
    pub queue_length: usize,
    /// Mean estimated wait in minutes, rounded half up.
    pub avg_wait_time: u64,
}

impl HomeStats {
    pub fn from_lists(tables: &[Table], queue: &[QueueEntry]) -> Self {
        let available_tables = tables.iter().filter(|t| t.is_available()).count();
        let avg_wait_time = if queue.is_empty() {
            0
        } else {
            let total: u64 = queue.iter().map(|q| q.estimated_wait_time as u64).sum();
            let len = queue.len() as u64;
            (total * 2 + len) / (len * 2)
        };

        Self {
            available_tables,
            total_tables: tables.len(),
            queue_length: queue.len(),
            avg_wait_time,
        }
    }
}

impl Display for HomeStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Available tables: {}/{} | Current wait: {} min | Queue: {} groups",
            self.available_tables, self.total_tables, self.avg_wait_time, self.queue_length
        )
    }
}

/// Home screen state. Failed fetches leave the last stats in place.
#[derive(Debug, Clone, Default)]
pub struct HomeState {
    pub stats: HomeStats,
    guard: SequenceGuard,
}

impl HomeState {
    pub fn new(guard: SequenceGuard) -> Self {
        Self {
            stats: HomeStats::default(),
            guard,
        }
    }

    pub fn apply(&mut self, event: &Event) {
        if let Some(Payload::Snapshot { tables, queue }) = &event.payload {
            if self.guard.admit(event.seq) {
                self.stats = HomeStats::from_lists(tables, queue);
            }
        }
    }
}

fn stat_card(
    title: &str,
    value: String,
    unit: String,
    color: Color,
    note: String,
) -> Paragraph<'_> {
    Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                value,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(unit, Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
        Line::from(Span::styled(note, Style::default().fg(Color::Gray))),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .padding(Padding::uniform(1)),
    )
}

pub fn render_home(f: &mut Frame, area: Rect, state: &HomeState, environment: &Environment) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Fill(1),
        ])
        .split(area);

    render_header(f, chunks[0], "", environment);

    let intro = Paragraph::new(vec![
        Line::from(Span::styled(
            "Smart Table Management",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Autonomous agent-driven queue and table tracking system.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "[D] View Dashboard   [S] Staff Login",
            Style::default().fg(Color::Cyan),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(intro, chunks[1]);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(chunks[2]);

    let stats = &state.stats;
    f.render_widget(
        stat_card(
            "Available Tables",
            stats.available_tables.to_string(),
            format!("/{}", stats.total_tables),
            Color::Green,
            "Updated live".to_string(),
        ),
        cards[0],
    );
    f.render_widget(
        stat_card(
            "Current Wait Time",
            stats.avg_wait_time.to_string(),
            " min".to_string(),
            Color::LightMagenta,
            format!("Queue: {} groups", stats.queue_length),
        ),
        cards[1],
    );

    let status = Paragraph::new(vec![
        Line::from(Span::styled(
            "🤖 Agents Active",
            Style::default().fg(Color::Green),
        )),
        Line::from(Span::styled(
            "📡 Live Sync",
            Style::default().fg(Color::Yellow),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title("System Status")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .padding(Padding::uniform(1)),
    );
    f.render_widget(status, cards[2]);
}
