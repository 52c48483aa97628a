//! Screen header component
//!
//! Renders the restaurant title and the API the viewer is connected to

use crate::environment::Environment;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub const APP_TITLE: &str = "Antigravity Restaurant";

pub fn render_header(f: &mut Frame, area: Rect, subtitle: &str, environment: &Environment) {
    let title = if subtitle.is_empty() {
        APP_TITLE.to_string()
    } else {
        format!("{} - {}", APP_TITLE, subtitle)
    };

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("API: {}", environment.api_url()),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick),
    );
    f.render_widget(header, area);
}
