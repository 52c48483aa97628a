mod api;
mod cli_messages;
mod commands;
mod config;
mod consts;
mod environment;
mod events;
mod logging;
mod models;
mod pretty;
mod session;
mod ui;
mod workers;

use crate::api::{RestaurantApi, RestaurantClient};
use crate::config::{Config, ConfigUpdate, get_config_path};
use crate::environment::{API_URL_ENV_VAR, Environment};
use crate::events::View;
use crate::logging::init_console_logging;
use crate::models::TableStatus;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use crate::ui::Route;
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Base URL of the restaurant API. Overrides RESTAURANT_API_URL and the config file.
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the viewer
    Start {
        /// Screen to open first: home, dashboard or staff
        #[arg(long, value_name = "SCREEN", default_value = "home")]
        screen: Route,

        /// Print events to the console instead of running the interactive UI
        #[arg(long, action = clap::ArgAction::SetTrue)]
        headless: bool,

        /// Disable background colors
        #[arg(long, action = clap::ArgAction::SetTrue)]
        no_background_color: bool,
    },
    /// Print availability, wait time and queue length
    Stats,
    /// List all tables
    Tables,
    /// List the waiting queue
    Queue,
    /// Change a table's status and trigger the agents
    SetStatus {
        /// ID of the table to update
        #[arg(long, value_name = "TABLE_ID")]
        table_id: u64,

        /// New status: available, occupied or reserved
        #[arg(long, value_name = "STATUS")]
        status: TableStatus,
    },
    /// Inspect or reset the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Delete the configuration file
    Reset,
    /// Change stored settings; the API URL is taken from the global --api-url
    Set {
        /// Seconds between Home refreshes
        #[arg(long, value_name = "SECS")]
        home_refresh_secs: Option<u64>,

        /// Seconds between Dashboard refreshes
        #[arg(long, value_name = "SECS")]
        dashboard_refresh_secs: Option<u64>,

        /// Seconds between Staff panel refreshes
        #[arg(long, value_name = "SECS")]
        staff_refresh_secs: Option<u64>,

        /// Paint the TUI background
        #[arg(long, value_name = "BOOL")]
        background_color: Option<bool>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let interactive = matches!(args.command, Command::Start { headless: false, .. });
    if !interactive {
        init_console_logging();
    }

    let config_path = get_config_path()?;

    if let Command::Config { action } = &args.command {
        return match action {
            ConfigAction::Show => commands::show_config(&config_path),
            ConfigAction::Reset => commands::reset_config(&config_path),
            ConfigAction::Set {
                home_refresh_secs,
                dashboard_refresh_secs,
                staff_refresh_secs,
                background_color,
            } => {
                let update = ConfigUpdate {
                    api_url: args.api_url.clone(),
                    home_refresh_secs: *home_refresh_secs,
                    dashboard_refresh_secs: *dashboard_refresh_secs,
                    staff_refresh_secs: *staff_refresh_secs,
                    with_background_color: *background_color,
                };
                commands::set_config(&config_path, update)
            }
        };
    }

    let config = Config::load_or_default(&config_path)
        .map_err(|e| format!("Failed to load config from {}: {}", config_path.display(), e))?;
    let env_url = std::env::var(API_URL_ENV_VAR).ok();
    let environment = Environment::resolve(
        args.api_url.as_deref(),
        env_url.as_deref(),
        config.api_url.as_deref(),
    );
    log::debug!("using {:?}", environment);

    match args.command {
        Command::Start {
            screen,
            headless,
            no_background_color,
        } => {
            let mut session = setup_session(environment, &config)?;
            if no_background_color {
                session.with_background_color = false;
            }
            if headless {
                let view = screen.polling_view().unwrap_or(View::StaffPanel);
                run_headless_mode(session, view).await
            } else {
                run_tui_mode(session, screen).await
            }
        }
        Command::Stats => commands::stats(&RestaurantClient::new(environment)?)
            .await
            .inspect_err(|e| print_cmd_error!("Failed to fetch stats", &e.to_string())),
        Command::Tables => commands::tables(&RestaurantClient::new(environment)?)
            .await
            .inspect_err(|e| print_cmd_error!("Failed to fetch tables", &e.to_string())),
        Command::Queue => commands::queue(&RestaurantClient::new(environment)?)
            .await
            .inspect_err(|e| print_cmd_error!("Failed to fetch queue", &e.to_string())),
        Command::SetStatus { table_id, status } => {
            let client = RestaurantClient::new(environment)?;
            log::debug!("setting status against {}", client.environment().api_url());
            commands::set_status(&client, table_id, status).await
        }
        Command::Config { .. } => Ok(()),
    }
}
