//! Table availability panel

use crate::models::Table;
use crate::ui::utils::status_color;
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Row, Table as TableWidget};

pub fn render_tables_panel(f: &mut Frame, area: Rect, tables: &[Table]) {
    let header = Row::new(vec!["Table", "Seats", "Status"]).style(
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
    );

    let rows = tables.iter().map(|table| {
        Row::new(vec![
            Cell::from(table.number.clone()).style(Style::default().add_modifier(Modifier::BOLD)),
            Cell::from(table.capacity.to_string()),
            Cell::from(table.status.to_string())
                .style(Style::default().fg(status_color(table.status))),
        ])
    });

    let widget = TableWidget::new(
        rows,
        [
            Constraint::Percentage(40),
            Constraint::Percentage(20),
            Constraint::Percentage(40),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title("TABLE AVAILABILITY (LIVE)")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(widget, area);
}
