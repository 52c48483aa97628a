//! Restaurant API Client
//!
//! JSON-over-HTTP client for the table and queue endpoints.

use crate::api::RestaurantApi;
use crate::api::error::ApiError;
use crate::environment::Environment;
use crate::models::{QueueEntry, StatusUpdate, Table, TableStatus};
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

// User-Agent string with the viewer version
const USER_AGENT: &str = concat!("restaurant-viewer/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct RestaurantClient {
    client: Client,
    environment: Environment,
}

impl RestaurantClient {
    pub fn new(environment: Environment) -> Result<Self, ApiError> {
        let client = ClientBuilder::new()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            environment,
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        log::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;

        let response = Self::handle_response_status(response).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait::async_trait]
impl RestaurantApi for RestaurantClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn list_tables(&self) -> Result<Vec<Table>, ApiError> {
        self.get_request("api/tables").await
    }

    async fn list_queue(&self) -> Result<Vec<QueueEntry>, ApiError> {
        self.get_request("api/queue").await
    }

    /// The updated table in the response body is ignored; callers re-fetch the list.
    async fn update_table_status(
        &self,
        table_id: u64,
        status: TableStatus,
    ) -> Result<(), ApiError> {
        let url = self.build_url(&format!("api/tables/{}", table_id));
        log::debug!("PUT {} status={}", url, status.as_str());
        let response = self
            .client
            .put(&url)
            .json(&StatusUpdate { status })
            .send()
            .await?;

        Self::handle_response_status(response).await?;
        Ok(())
    }

    async fn run_agents(&self) -> Result<(), ApiError> {
        let url = self.build_url("api/agents/run");
        log::debug!("POST {}", url);
        let response = self.client.post(&url).send().await?;

        Self::handle_response_status(response).await?;
        Ok(())
    }
}
