//! Error handling for the API module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Failed to decode a JSON body returned by the server.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },
}

impl ApiError {
    pub async fn from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        ApiError::Http { status, message }
    }

    /// Single message shown to users regardless of the failure kind.
    pub fn user_message(&self) -> &'static str {
        "Failed to fetch data"
    }
}
