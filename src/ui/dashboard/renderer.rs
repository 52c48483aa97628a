//! Dashboard main renderer

use super::components::{queue, tables};
use super::state::{DashboardPhase, DashboardState};
use crate::environment::Environment;
use crate::ui::components::header::render_header;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub fn render_dashboard(
    f: &mut Frame,
    area: Rect,
    state: &DashboardState,
    environment: &Environment,
) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Fill(1)])
        .split(area);

    render_header(f, main_chunks[0], "Customer Dashboard", environment);

    match state.phase() {
        DashboardPhase::Loading => render_centered(
            f,
            main_chunks[1],
            vec![Line::from(Span::styled(
                "Loading...",
                Style::default().fg(Color::Gray),
            ))],
        ),
        DashboardPhase::Failed(message) => render_centered(
            f,
            main_chunks[1],
            vec![
                Line::from(Span::styled(
                    format!("Error: {}", message),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "[R] Retry",
                    Style::default().fg(Color::Cyan),
                )),
            ],
        ),
        DashboardPhase::Ready => {
            let content_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
                .split(main_chunks[1]);

            tables::render_tables_panel(f, content_chunks[0], &state.tables);
            queue::render_queue_panel(f, content_chunks[1], &state.queue);
        }
    }
}

fn render_centered(f: &mut Frame, area: Rect, lines: Vec<Line>) {
    let height = lines.len() as u16;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rows[1]);
}
