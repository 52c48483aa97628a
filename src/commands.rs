//! One-shot commands: fetch or change something once and print the result.

use crate::api::RestaurantApi;
use crate::config::{Config, ConfigUpdate};
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::models::TableStatus;
use crate::pretty::{format_queue, format_tables};
use crate::ui::home::HomeStats;
use crate::workers::{ActionOutcome, EventSender, Sequencer, change_table_status};
use crate::{print_cmd_error, print_cmd_info, print_cmd_success, print_cmd_warn};
use std::error::Error;
use std::path::Path;
use tokio::sync::mpsc;

/// Fetch tables and queue together and compute the Home stats.
pub async fn fetch_stats(api: &dyn RestaurantApi) -> Result<HomeStats, Box<dyn Error>> {
    let (tables, queue) = futures::future::try_join(api.list_tables(), api.list_queue()).await?;
    Ok(HomeStats::from_lists(&tables, &queue))
}

pub async fn stats(api: &dyn RestaurantApi) -> Result<(), Box<dyn Error>> {
    let stats = fetch_stats(api).await?;
    println!("{}", stats);
    Ok(())
}

pub async fn tables(api: &dyn RestaurantApi) -> Result<(), Box<dyn Error>> {
    let tables = api.list_tables().await?;
    println!("{}", format_tables(&tables));
    Ok(())
}

pub async fn queue(api: &dyn RestaurantApi) -> Result<(), Box<dyn Error>> {
    let queue = api.list_queue().await?;
    println!("{}", format_queue(&queue));
    Ok(())
}

/// Run the staff write path once, printing its activity.
pub async fn set_status(
    api: &dyn RestaurantApi,
    table_id: u64,
    status: TableStatus,
) -> Result<(), Box<dyn Error>> {
    let (sender, mut receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
    let event_sender = EventSender::new(sender);
    let outcome =
        change_table_status(api, &event_sender, &Sequencer::new(), table_id, status).await;
    drop(event_sender);

    while let Some(event) = receiver.recv().await {
        if event.should_display() {
            println!("{}", event);
        }
    }

    match outcome {
        ActionOutcome::Applied => {
            print_cmd_success!("Status updated", "Table {} is now {}", table_id, status.as_str());
            Ok(())
        }
        ActionOutcome::Rejected => {
            print_cmd_error!("Status update rejected");
            Err(format!("Failed to update table {}", table_id).into())
        }
    }
}

pub fn show_config(config_path: &Path) -> Result<(), Box<dyn Error>> {
    if !config_path.exists() {
        print_cmd_info!("No config file", "{} (using defaults)", config_path.display());
    }
    let config = Config::load_or_default(config_path)?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

/// Merge `update` into the stored config (or the defaults) and save it.
pub fn set_config(config_path: &Path, update: ConfigUpdate) -> Result<(), Box<dyn Error>> {
    if update.is_empty() {
        print_cmd_warn!("Nothing to set", "pass at least one option, see `config set --help`");
        return Ok(());
    }
    let mut config = Config::load_or_default(config_path)?;
    update.apply(&mut config);
    config
        .save(config_path)
        .map_err(|e| format!("Failed to save config: {}", e))?;
    print_cmd_success!("Config saved", "{}", config_path.display());
    Ok(())
}

pub fn reset_config(config_path: &Path) -> Result<(), Box<dyn Error>> {
    if !config_path.exists() {
        print_cmd_warn!("Nothing to reset", "{} does not exist", config_path.display());
        return Ok(());
    }
    Config::clear(config_path)?;
    print_cmd_success!("Config reset", "Removed {}", config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockRestaurantApi;
    use crate::api::error::ApiError;
    use crate::models::{QueueEntry, Table};
    use mockall::Sequence;

    fn table(id: u64, status: TableStatus) -> Table {
        Table {
            id,
            number: format!("T{}", id),
            capacity: 4,
            status,
            occupied_since: None,
        }
    }

    fn entry(id: u64, wait: u32) -> QueueEntry {
        QueueEntry {
            id,
            position: id as u32,
            name: format!("Guest {}", id),
            party_size: 2,
            estimated_wait_time: wait,
            phone: None,
        }
    }

    #[tokio::test]
    async fn test_fetch_stats() {
        let mut api = MockRestaurantApi::new();
        api.expect_list_tables().times(1).returning(|| {
            Ok(vec![
                table(1, TableStatus::Available),
                table(2, TableStatus::Occupied),
                table(3, TableStatus::Available),
            ])
        });
        api.expect_list_queue()
            .times(1)
            .returning(|| Ok(vec![entry(1, 10), entry(2, 15)]));

        let stats = fetch_stats(&api).await.unwrap();
        assert_eq!(stats.available_tables, 2);
        assert_eq!(stats.total_tables, 3);
        assert_eq!(stats.queue_length, 2);
        // 12.5 rounds up
        assert_eq!(stats.avg_wait_time, 13);
    }

    #[tokio::test]
    async fn test_fetch_stats_fails_when_either_request_fails() {
        let mut api = MockRestaurantApi::new();
        api.expect_list_tables().returning(|| Ok(Vec::new()));
        api.expect_list_queue().returning(|| {
            Err(ApiError::Http {
                status: 500,
                message: "boom".to_string(),
            })
        });
        assert!(fetch_stats(&api).await.is_err());
    }

    #[tokio::test]
    async fn test_set_status_runs_write_path() {
        let mut seq = Sequence::new();
        let mut api = MockRestaurantApi::new();
        api.expect_update_table_status()
            .withf(|id, status| *id == 7 && *status == TableStatus::Occupied)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        api.expect_list_tables()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(vec![table(7, TableStatus::Occupied)]));
        api.expect_run_agents()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));

        assert!(set_status(&api, 7, TableStatus::Occupied).await.is_ok());
    }

    #[test]
    fn test_set_config_merges_into_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".restaurant-viewer").join("config.json");
        Config {
            dashboard_refresh_secs: 8,
            ..Config::default()
        }
        .save(&path)
        .unwrap();

        set_config(
            &path,
            ConfigUpdate {
                api_url: Some("http://10.0.0.7:8000".to_string()),
                ..ConfigUpdate::default()
            },
        )
        .unwrap();

        let saved = Config::load_from_file(&path).unwrap();
        assert_eq!(saved.api_url.as_deref(), Some("http://10.0.0.7:8000"));
        assert_eq!(saved.dashboard_refresh_secs, 8);
    }

    #[test]
    fn test_set_config_without_options_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        set_config(&path, ConfigUpdate::default()).unwrap();
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_set_status_reports_rejection() {
        let mut api = MockRestaurantApi::new();
        api.expect_update_table_status().times(1).returning(|_, _| {
            Err(ApiError::Http {
                status: 404,
                message: "not found".to_string(),
            })
        });
        api.expect_list_tables().never();
        api.expect_run_agents().never();

        assert!(set_status(&api, 7, TableStatus::Reserved).await.is_err());
    }
}
