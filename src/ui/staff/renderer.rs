//! Staff panel renderer

use super::state::StaffPanelState;
use crate::environment::Environment;
use crate::models::TableStatus;
use crate::ui::components::header::render_header;
use crate::ui::utils::status_color;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table as TableWidget};

pub fn render_staff_panel(
    f: &mut Frame,
    area: Rect,
    state: &StaffPanelState,
    environment: &Environment,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(area);

    render_header(f, chunks[0], "Staff Panel", environment);

    if state.loading {
        f.render_widget(
            Paragraph::new("Loading...").alignment(Alignment::Center),
            chunks[2],
        );
        return;
    }

    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                "Table Management (Live)",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "   🤖 Agents auto-run on every update",
                Style::default().fg(Color::Gray),
            ),
        ])),
        chunks[1],
    );

    let header = Row::new(vec!["Table", "Capacity", "Status", "Occupied since", "Set"]).style(
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
    );

    let rows = state.tables.iter().enumerate().map(|(index, table)| {
        let updating = state.updating == Some(table.id);
        let actions: Vec<Span> = TableStatus::SETTABLE
            .iter()
            .map(|status| {
                let label = format!("{} ", status_key_label(*status));
                if *status == table.status {
                    Span::styled(
                        format!("✓{}", label),
                        Style::default()
                            .fg(status_color(*status))
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(label, Style::default().fg(status_color(*status)))
                }
            })
            .collect();

        let mut row_style = Style::default();
        if index == state.selected {
            row_style = row_style.bg(Color::Rgb(40, 48, 56));
        }
        if updating {
            row_style = row_style.add_modifier(Modifier::DIM);
        }

        Row::new(vec![
            Cell::from(table.number.clone()).style(Style::default().add_modifier(Modifier::BOLD)),
            Cell::from(table.capacity.to_string()),
            Cell::from(if updating {
                "Updating...".to_string()
            } else {
                table.status.to_string()
            })
            .style(Style::default().fg(status_color(table.status))),
            Cell::from(table.occupied_since.clone().unwrap_or_default()),
            Cell::from(Line::from(actions)),
        ])
        .style(row_style)
    });

    let widget = TableWidget::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Length(13),
            Constraint::Length(21),
            Constraint::Fill(1),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Magenta)),
    );

    f.render_widget(widget, chunks[2]);
}

fn status_key_label(status: TableStatus) -> &'static str {
    match status {
        TableStatus::Available => "[A]vailable",
        TableStatus::Occupied => "[O]ccupied",
        TableStatus::Reserved => "[R]eserved",
        TableStatus::Unknown => "",
    }
}
