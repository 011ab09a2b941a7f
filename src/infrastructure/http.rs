use crate::config::Config;
use crate::domain::models::Record;
use crate::domain::source::{DataSource, FetchError};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const USER_AGENT: &str = concat!("sift/", env!("CARGO_PKG_VERSION"));

/// Remote shape of one entry. Everything except `name` is ignored.
#[derive(Debug, Deserialize)]
struct RemoteUser {
    name: String,
}

impl From<RemoteUser> for Record {
    fn from(user: RemoteUser) -> Self {
        Record { name: user.name }
    }
}

/// Fetches the user collection with a single unauthenticated GET.
pub struct HttpDataSource {
    client: Client,
    endpoint: String,
}

impl HttpDataSource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.endpoint.clone(), config.timeout())
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    async fn fetch(&self) -> Result<Vec<Record>, FetchError> {
        tracing::info!(endpoint = %self.endpoint, "fetching users");
        let body = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        parse_users(&body)
    }

    fn endpoint(&self) -> String {
        self.endpoint.clone()
    }
}

/// Projects a JSON array of user objects onto `Record`s, keeping order.
pub fn parse_users(body: &str) -> Result<Vec<Record>, FetchError> {
    let users: Vec<RemoteUser> = serde_json::from_str(body)?;
    Ok(users.into_iter().map(Record::from).collect())
}
