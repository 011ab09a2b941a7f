use crate::domain::models::Record;
use async_trait::async_trait;
use thiserror::Error;

/// The only failure the directory can report. The message is shown to the
/// user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FetchError {
    pub message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            "Request timed out".to_string()
        } else if err.is_connect() {
            "Network Error".to_string()
        } else if let Some(status) = err.status() {
            format!("Request failed with status code {}", status.as_u16())
        } else if err.is_decode() {
            format!("Invalid response: {err}")
        } else {
            err.to_string()
        };
        Self { message }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            message: format!("Invalid response: {err}"),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DataSource: Send + Sync {
    // Called once at startup, never retried
    async fn fetch(&self) -> Result<Vec<Record>, FetchError>;

    fn endpoint(&self) -> String;
}
