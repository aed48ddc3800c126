//! Telegram notifications
//!
//! Stateless wrapper around the Bot API `sendMessage` call. Retry on failure
//! is the poll loop's concern, not this layer's.

use crate::error::{BotError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info};

/// Outbound message boundary, so the poll loop can run against a fake.
#[async_trait]
pub trait MessageSink: Send + Sync {
    /// Deliver one text message to the configured chat.
    async fn send(&self, text: &str) -> Result<()>;
}

/// Telegram notifier bound to a fixed destination chat
#[derive(Clone)]
pub struct Notifier {
    http: Client,
    bot_token: String,
    chat_id: String,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest {
    chat_id: String,
    text: String,
}

impl Notifier {
    pub fn new(bot_token: String, chat_id: String) -> Self {
        Self {
            http: Client::new(),
            bot_token,
            chat_id,
        }
    }
}

#[async_trait]
impl MessageSink for Notifier {
    async fn send(&self, text: &str) -> Result<()> {
        debug!("sending message to chat {}", self.chat_id);

        let url = format!(
            "https://api.telegram.org/bot{}/sendMessage",
            self.bot_token
        );

        let request = SendMessageRequest {
            chat_id: self.chat_id.clone(),
            text: text.to_string(),
        };

        let resp = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| BotError::Delivery(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(BotError::Delivery(format!(
                "код ответа {}",
                resp.status().as_u16()
            )));
        }

        info!("message sent: \"{}\"", text);
        Ok(())
    }
}
