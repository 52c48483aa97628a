//! Main application state and UI loop
//!
//! Contains the App struct, screen routing and key handling

use crate::api::RestaurantApi;
use crate::config::RefreshIntervals;
use crate::consts::cli_consts::{INPUT_POLL_INTERVAL, MAX_ACTIVITY_LOGS, SPLASH_DURATION};
use crate::environment::Environment;
use crate::events::{Event as WorkerEvent, View};
use crate::models::TableStatus;
use crate::ui::components::{footer::render_footer, logs::render_logs_panel};
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::home::{HomeState, render_home};
use crate::ui::login::{LoginForm, render_login};
use crate::ui::route::Route;
use crate::ui::splash::render_splash;
use crate::ui::staff::{StaffPanelState, render_staff_panel};
use crate::workers::{EventSender, Poller, PollerHandle, SequenceGuard, Sequencer, change_table_status};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;
use ratatui::{Frame, Terminal, backend::Backend};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub intervals: RefreshIntervals,
    /// Screen shown once the splash screen is dismissed.
    pub initial_route: Route,
}

impl UIConfig {
    pub fn new(with_background_color: bool, intervals: RefreshIntervals, initial_route: Route) -> Self {
        Self {
            with_background_color,
            intervals,
            initial_route,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Aggregate stats.
    Home(HomeState),
    /// Customer-facing tables and queue.
    Dashboard(Box<DashboardState>),
    /// Credential gate in front of the staff panel.
    StaffLogin(LoginForm),
    /// Table status management.
    StaffPanel(Box<StaffPanelState>),
}

/// Application state
pub struct App {
    environment: Environment,
    api: Arc<dyn RestaurantApi>,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Poller for the current screen, if it polls.
    poller: Option<PollerHandle>,

    /// Hands out request sequence numbers to pollers and actions.
    sequencer: Sequencer,

    /// Cloned into every worker.
    event_sender: EventSender,

    /// Receives events from worker tasks.
    event_receiver: mpsc::Receiver<WorkerEvent>,

    /// Recent worker events, oldest first.
    activity_logs: VecDeque<WorkerEvent>,

    ui_config: UIConfig,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        api: Arc<dyn RestaurantApi>,
        event_sender: EventSender,
        event_receiver: mpsc::Receiver<WorkerEvent>,
        sequencer: Sequencer,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            environment: api.environment().clone(),
            api,
            current_screen: Screen::Splash,
            poller: None,
            sequencer,
            event_sender,
            event_receiver,
            activity_logs: VecDeque::new(),
            ui_config,
        }
    }

    /// Switch screens: stop the old poller, mount fresh state, start the new poller.
    pub fn navigate(&mut self, route: Route) {
        log::debug!("navigating to {}", route.path());
        if let Some(handle) = self.poller.take() {
            log::debug!("stopping {} poller", handle.view());
            // The task winds down on its own; an in-flight fetch is left to finish.
            drop(handle.stop());
        }

        // Anything issued before this point belongs to an earlier mount.
        let guard = SequenceGuard::after(self.sequencer.current());
        self.current_screen = match route {
            Route::Home => Screen::Home(HomeState::new(guard)),
            Route::Dashboard => Screen::Dashboard(Box::new(DashboardState::new(guard))),
            Route::StaffLogin => Screen::StaffLogin(LoginForm::default()),
            Route::StaffPanel => Screen::StaffPanel(Box::new(StaffPanelState::new(guard))),
        };

        if let Some(view) = route.polling_view() {
            let interval = match view {
                View::Home => self.ui_config.intervals.home,
                View::Dashboard => self.ui_config.intervals.dashboard,
                View::StaffPanel => self.ui_config.intervals.staff,
            };
            let poller = Poller::new(
                view,
                self.api.clone(),
                self.event_sender.clone(),
                self.sequencer.clone(),
                interval,
            );
            self.poller = Some(poller.spawn());
        }
    }

    /// Stop background work before exiting.
    pub fn shutdown(&mut self) {
        if let Some(handle) = self.poller.take() {
            drop(handle.stop());
        }
    }

    /// Record an event in the activity log and hand it to the mounted view.
    ///
    /// Events for a view that is not mounted are dropped.
    pub fn process_event(&mut self, event: WorkerEvent) {
        match (&mut self.current_screen, event.view) {
            (Screen::Home(state), View::Home) => state.apply(&event),
            (Screen::Dashboard(state), View::Dashboard) => state.apply(&event),
            (Screen::StaffPanel(state), View::StaffPanel) => state.apply(&event),
            _ => {}
        }

        if event.should_display() {
            if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
                self.activity_logs.pop_front();
            }
            self.activity_logs.push_back(event);
        }
    }

    /// Drain every queued worker event without blocking.
    pub fn process_pending_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.process_event(event);
        }
    }

    /// Handle a key press. Returns true when the application should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return true;
        }

        // The login form takes text input, so global shortcuts do not apply there.
        if let Screen::StaffLogin(form) = &mut self.current_screen {
            let next = match key.code {
                KeyCode::Esc => Some(Route::Home),
                KeyCode::Enter => form.submit(),
                KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                    form.toggle_focus();
                    None
                }
                KeyCode::Backspace => {
                    form.backspace();
                    None
                }
                KeyCode::Char(c) => {
                    form.input(c);
                    None
                }
                _ => None,
            };
            if let Some(route) = next {
                self.navigate(route);
            }
            return false;
        }

        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
            return true;
        }

        // Any other key skips the splash screen
        if let Screen::Splash = self.current_screen {
            self.navigate(self.ui_config.initial_route);
            return false;
        }

        match key.code {
            KeyCode::Char('h') => self.navigate(Route::Home),
            KeyCode::Char('d') => self.navigate(Route::Dashboard),
            KeyCode::Char('s') => self.navigate(Route::StaffLogin),
            _ => self.handle_screen_key(key.code),
        }
        false
    }

    fn handle_screen_key(&mut self, code: KeyCode) {
        match &mut self.current_screen {
            Screen::Dashboard(_) => {
                if code == KeyCode::Char('r') {
                    if let Some(poller) = &self.poller {
                        poller.refresh_now();
                    }
                }
            }
            Screen::StaffPanel(state) => {
                let change = match code {
                    KeyCode::Up | KeyCode::Char('k') => {
                        state.select_previous();
                        None
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        state.select_next();
                        None
                    }
                    KeyCode::Char('a') => state.begin_update(TableStatus::Available),
                    KeyCode::Char('o') => state.begin_update(TableStatus::Occupied),
                    KeyCode::Char('r') => state.begin_update(TableStatus::Reserved),
                    KeyCode::Char('l') => {
                        self.navigate(Route::StaffLogin);
                        return;
                    }
                    _ => None,
                };
                if let Some((table_id, status)) = change {
                    self.spawn_status_change(table_id, status);
                }
            }
            _ => {}
        }
    }

    fn spawn_status_change(&self, table_id: u64, status: TableStatus) {
        let api = self.api.clone();
        let event_sender = self.event_sender.clone();
        let sequencer = self.sequencer.clone();
        tokio::spawn(async move {
            change_table_status(api.as_ref(), &event_sender, &sequencer, table_id, status).await;
        });
    }

    fn footer_hints(&self) -> &'static str {
        match self.current_screen {
            Screen::Splash => "Press any key to continue",
            Screen::Home(_) => "[D] Dashboard | [S] Staff Login",
            Screen::Dashboard(_) => "[R] Refresh | [H] Home | [S] Staff Login",
            Screen::StaffLogin(_) => "[Enter] Login | [Esc] Home",
            Screen::StaffPanel(_) => {
                "[↑/↓] Select | [A]vailable [O]ccupied [R]eserved | [L] Logout | [H] Home"
            }
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();

    loop {
        app.process_pending_events();
        terminal.draw(|f| render(f, &app))?;

        // Handle splash-to-initial-screen transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= SPLASH_DURATION {
                app.navigate(app.ui_config.initial_route);
                continue;
            }
        }

        // Poll for key events
        if event::poll(INPUT_POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if app.handle_key(key) {
                    app.shutdown();
                    return Ok(());
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    if app.ui_config.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    if let Screen::Splash = app.current_screen {
        render_splash(f, &app.environment);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(8),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    let env = &app.environment;
    match &app.current_screen {
        Screen::Splash => {}
        Screen::Home(state) => render_home(f, chunks[0], state, env),
        Screen::Dashboard(state) => render_dashboard(f, chunks[0], state, env),
        Screen::StaffLogin(form) => render_login(f, chunks[0], form, env),
        Screen::StaffPanel(state) => render_staff_panel(f, chunks[0], state, env),
    }
    render_logs_panel(f, chunks[1], &app.activity_logs);
    render_footer(f, chunks[2], app.footer_hints());
}
