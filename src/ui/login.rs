//! Staff login screen
//!
//! A credential gate only: any non-empty username and password are accepted and
//! nothing is sent over the network.

use crate::environment::Environment;
use crate::ui::components::header::render_header;
use crate::ui::route::Route;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub focus: LoginField,
}

impl LoginForm {
    pub fn input(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        };
    }

    /// The route to go to on submit, if both fields are filled in.
    pub fn submit(&self) -> Option<Route> {
        if !self.username.is_empty() && !self.password.is_empty() {
            Some(Route::StaffPanel)
        } else {
            None
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }
}

fn input_box<'a>(label: &'a str, value: String, focused: bool) -> Paragraph<'a> {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    Paragraph::new(value).block(
        Block::default()
            .title(label)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color)),
    )
}

/// Renders the login form with the password masked.
pub fn render_login(f: &mut Frame, area: Rect, form: &LoginForm, environment: &Environment) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Fill(1)])
        .split(area);
    render_header(f, chunks[0], "Staff", environment);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(50),
            Constraint::Fill(1),
        ])
        .split(chunks[1]);

    let card = Block::default()
        .title("Staff Login")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(2));
    let inner = card.inner(columns[1]);
    f.render_widget(card, columns[1]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .split(inner);

    let cursor = |field: LoginField| if form.focus == field { "_" } else { "" };
    f.render_widget(
        input_box(
            "Username",
            format!("{}{}", form.username, cursor(LoginField::Username)),
            form.focus == LoginField::Username,
        ),
        rows[1],
    );
    f.render_widget(
        input_box(
            "Password",
            format!(
                "{}{}",
                "*".repeat(form.password.chars().count()),
                cursor(LoginField::Password)
            ),
            form.focus == LoginField::Password,
        ),
        rows[2],
    );

    let help = Paragraph::new(vec![
        Line::from(Span::styled(
            "[Tab] Switch field  [Enter] Login  [Esc] Back to Home",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Demo: Use any username/password to login",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(help, rows[4]);
}
