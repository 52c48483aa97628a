//! Staff status-change action
//!
//! PUT the new status, and only when that succeeds, re-fetch the table list and
//! fire the agent orchestration trigger. The "updating" marker is cleared on
//! every path.

use super::core::{EventSender, Sequencer};
use crate::api::RestaurantApi;
use crate::api::error_handler::ErrorHandler;
use crate::events::{Event, EventType, View};
use crate::logging::LogLevel;
use crate::models::TableStatus;

/// How a status change ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The server accepted the new status.
    Applied,
    /// The PUT failed; nothing else was called.
    Rejected,
}

/// Run one status change for `table_id` and report progress as events.
pub async fn change_table_status(
    api: &dyn RestaurantApi,
    event_sender: &EventSender,
    sequencer: &Sequencer,
    table_id: u64,
    status: TableStatus,
) -> ActionOutcome {
    let error_handler = ErrorHandler::new();

    let outcome = match api.update_table_status(table_id, status).await {
        Ok(()) => {
            event_sender
                .send_event(Event::log(
                    View::StaffPanel,
                    format!("Table {} set to {}", table_id, status),
                    EventType::Action,
                    LogLevel::Info,
                ))
                .await;

            let seq = sequencer.next();
            let refreshed = match api.list_tables().await {
                Ok(tables) => Event::tables(View::StaffPanel, seq, tables),
                Err(e) => Event::fetch_failed(
                    View::StaffPanel,
                    seq,
                    e.user_message().to_string(),
                    e.to_string(),
                    error_handler.classify_error(&e),
                ),
            };
            event_sender.send_event(refreshed).await;

            // The trigger's response is not used, and its failure is not surfaced.
            if let Err(e) = api.run_agents().await {
                log::debug!("agent orchestration trigger failed: {}", e);
                event_sender
                    .send_event(Event::log(
                        View::StaffPanel,
                        format!("Agent trigger failed: {}", e),
                        EventType::Error,
                        LogLevel::Debug,
                    ))
                    .await;
            }
            ActionOutcome::Applied
        }
        Err(e) => {
            log::warn!("updating table {} failed: {}", table_id, e);
            event_sender
                .send_event(Event::log(
                    View::StaffPanel,
                    format!("Error updating table {}: {}", table_id, e),
                    EventType::Error,
                    error_handler.classify_error(&e),
                ))
                .await;
            ActionOutcome::Rejected
        }
    };

    event_sender
        .send_event(Event::update_finished(table_id))
        .await;
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockRestaurantApi;
    use crate::api::error::ApiError;
    use crate::events::Payload;
    use mockall::Sequence;
    use mockall::predicate::eq;
    use tokio::sync::mpsc;

    fn drain(receiver: &mut mpsc::Receiver<Event>) -> Vec<Event> {
        let mut events = Vec::new();
        while let Ok(event) = receiver.try_recv() {
            events.push(event);
        }
        events
    }

    #[tokio::test]
    async fn test_success_refetches_then_triggers_agents_once() {
        let mut api = MockRestaurantApi::new();
        let mut order = Sequence::new();
        api.expect_update_table_status()
            .with(eq(4), eq(TableStatus::Occupied))
            .times(1)
            .in_sequence(&mut order)
            .returning(|_, _| Ok(()));
        api.expect_list_tables()
            .times(1)
            .in_sequence(&mut order)
            .returning(|| Ok(Vec::new()));
        api.expect_run_agents()
            .times(1)
            .in_sequence(&mut order)
            .returning(|| Ok(()));

        let (sender, mut receiver) = mpsc::channel(16);
        let outcome = change_table_status(
            &api,
            &EventSender::new(sender),
            &Sequencer::new(),
            4,
            TableStatus::Occupied,
        )
        .await;

        assert_eq!(outcome, ActionOutcome::Applied);
        let events = drain(&mut receiver);
        assert!(
            events
                .iter()
                .any(|e| e.payload == Some(Payload::Tables(Vec::new())))
        );
        assert_eq!(
            events.last().and_then(|e| e.payload.clone()),
            Some(Payload::UpdateFinished(4))
        );
    }

    #[tokio::test]
    async fn test_failed_put_skips_refetch_and_trigger() {
        let mut api = MockRestaurantApi::new();
        api.expect_update_table_status().times(1).returning(|_, _| {
            Err(ApiError::Http {
                status: 404,
                message: "Table not found".to_string(),
            })
        });
        api.expect_list_tables().never();
        api.expect_run_agents().never();

        let (sender, mut receiver) = mpsc::channel(16);
        let outcome = change_table_status(
            &api,
            &EventSender::new(sender),
            &Sequencer::new(),
            9,
            TableStatus::Available,
        )
        .await;

        assert_eq!(outcome, ActionOutcome::Rejected);
        let events = drain(&mut receiver);
        assert_eq!(
            events.last().and_then(|e| e.payload.clone()),
            Some(Payload::UpdateFinished(9))
        );
        assert!(events.iter().any(|e| e.event_type == EventType::Error));
    }

    #[tokio::test]
    async fn test_trigger_failure_is_ignored() {
        let mut api = MockRestaurantApi::new();
        api.expect_update_table_status()
            .returning(|_, _| Ok(()));
        api.expect_list_tables().returning(|| Ok(Vec::new()));
        api.expect_run_agents().times(1).returning(|| {
            Err(ApiError::Http {
                status: 500,
                message: "agent crashed".to_string(),
            })
        });

        let (sender, mut receiver) = mpsc::channel(16);
        let outcome = change_table_status(
            &api,
            &EventSender::new(sender),
            &Sequencer::new(),
            1,
            TableStatus::Reserved,
        )
        .await;

        assert_eq!(outcome, ActionOutcome::Applied);
        let events = drain(&mut receiver);
        assert_eq!(
            events.last().and_then(|e| e.payload.clone()),
            Some(Payload::UpdateFinished(1))
        );
    }
}
