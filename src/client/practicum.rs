//! Practicum homework status API client
//!
//! Fetches the raw status payload for one account. Shape validation happens
//! downstream in [`crate::response`]; this layer only owns the transport
//! contract: non-200 or an unreachable endpoint is a server-unavailability
//! error, everything else is handed over as decoded JSON.

use crate::error::{BotError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, info};

/// Homework status API endpoint.
pub const ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Boundary to the status API, so the poll loop can run against a fake.
#[async_trait]
pub trait StatusApi: Send + Sync {
    /// Fetch the raw status payload for records at or after `from_date`.
    async fn fetch_statuses(&self, from_date: i64) -> Result<Value>;
}

/// Practicum API client
#[derive(Clone)]
pub struct PracticumClient {
    http: Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(token: String) -> Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            endpoint: ENDPOINT.to_string(),
            token,
        })
    }
}

#[async_trait]
impl StatusApi for PracticumClient {
    async fn fetch_statuses(&self, from_date: i64) -> Result<Value> {
        debug!("requesting {} with from_date={}", self.endpoint, from_date);

        let resp = self
            .http
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| BotError::ServerUnavailability {
                endpoint: self.endpoint.clone(),
                reason: format!("Ошибка соединения: {}", e),
            })?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(BotError::ServerUnavailability {
                endpoint: self.endpoint.clone(),
                reason: format!("Код ответа API: {}", status.as_u16()),
            });
        }

        info!("request to {} succeeded, status {}", self.endpoint, status);
        Ok(resp.json::<Value>().await?)
    }
}
