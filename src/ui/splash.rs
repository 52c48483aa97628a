//! Start-up screen
//!
//! Shows the restaurant name and the API the viewer is about to poll, so a
//! wrong `--api-url` is visible before the first screen loads.

use crate::environment::Environment;
use crate::ui::components::header::APP_TITLE;
use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

const TAGLINE: &str = "Live tables · Smart queue · Agents on duty";

/// Lines of the splash card, top to bottom.
fn splash_lines(environment: &Environment) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            format!("🍽  {}", APP_TITLE),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(TAGLINE, Style::default().fg(Color::Gray))),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("{} API ", environment),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(environment.api_url(), Style::default().fg(Color::LightBlue)),
        ]),
        Line::from(Span::styled(
            format!("restaurant-viewer v{}", env!("CARGO_PKG_VERSION")),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to continue",
            Style::default().fg(Color::Cyan),
        )),
    ]
}

pub fn render_splash(f: &mut Frame, environment: &Environment) {
    let text = Text::from(splash_lines(environment)).centered();
    let width = text.width().max(40) as u16 + 6;
    let height = text.height() as u16 + 2;

    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(f.area());
    let [card] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Cyan));
    f.render_widget(Paragraph::new(text).block(block), card);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splash_shows_target_api() {
        let environment = Environment::Custom {
            api_url: "http://10.0.0.7:8000/".to_string(),
        };
        let rendered: Vec<String> = splash_lines(&environment)
            .iter()
            .map(|line| line.to_string())
            .collect();

        assert!(rendered[0].contains(APP_TITLE));
        assert!(rendered.iter().any(|l| l == "Custom API http://10.0.0.7:8000"));
        assert!(
            rendered
                .iter()
                .any(|l| l.ends_with(env!("CARGO_PKG_VERSION")))
        );
    }
}
