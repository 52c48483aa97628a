use crate::environment::Environment;
use crate::models::{QueueEntry, Table, TableStatus};
use error::ApiError;

pub(crate) mod client;
pub use client::RestaurantClient;
pub mod error;
pub mod error_handler;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait RestaurantApi: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Fetch every table.
    async fn list_tables(&self) -> Result<Vec<Table>, ApiError>;

    /// Fetch the waiting queue, ordered by position.
    async fn list_queue(&self) -> Result<Vec<QueueEntry>, ApiError>;

    /// Request a status transition for one table.
    async fn update_table_status(&self, table_id: u64, status: TableStatus)
    -> Result<(), ApiError>;

    /// Trigger a server-side agent orchestration cycle.
    async fn run_agents(&self) -> Result<(), ApiError>;
}
