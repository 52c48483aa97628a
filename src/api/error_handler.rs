//! Maps API errors onto activity log levels

use super::error::ApiError;
use crate::logging::LogLevel;

#[derive(Debug, Clone, Default)]
pub struct ErrorHandler;

impl ErrorHandler {
    pub fn new() -> Self {
        Self
    }

    /// Classify error and determine appropriate log level
    pub fn classify_error(&self, error: &ApiError) -> LogLevel {
        match error {
            // Server errors - temporary issues
            ApiError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Client errors - the request itself is wrong
            ApiError::Http { .. } => LogLevel::Error,

            // Network issues - usually temporary
            ApiError::Reqwest(_) => LogLevel::Warn,

            // The server sent something we cannot read
            ApiError::Decode(_) => LogLevel::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16) -> ApiError {
        ApiError::Http {
            status,
            message: String::new(),
        }
    }

    #[test]
    fn test_classify_http_errors() {
        let handler = ErrorHandler::new();
        assert_eq!(handler.classify_error(&http(503)), LogLevel::Warn);
        assert_eq!(handler.classify_error(&http(404)), LogLevel::Error);
        assert_eq!(handler.classify_error(&http(422)), LogLevel::Error);
    }

    #[test]
    fn test_classify_decode_error() {
        let decode = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        assert_eq!(
            ErrorHandler::new().classify_error(&ApiError::Decode(decode)),
            LogLevel::Error
        );
    }
}
