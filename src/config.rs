//! Environment-backed configuration
//!
//! Three required values, read once at startup. Preflight reports every
//! missing variable by name before the process stops, so `missing` returns
//! the full list rather than failing on the first.

use std::env;

pub const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
pub const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
}

impl Config {
    /// Read configuration from the process environment. Unset variables come
    /// back as empty strings and are caught by [`Config::missing`].
    pub fn from_env() -> Self {
        Self {
            practicum_token: env::var(PRACTICUM_TOKEN).unwrap_or_default(),
            telegram_token: env::var(TELEGRAM_TOKEN).unwrap_or_default(),
            telegram_chat_id: env::var(TELEGRAM_CHAT_ID).unwrap_or_default(),
        }
    }

    /// Names of required variables that are unset or empty.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.practicum_token.is_empty() {
            missing.push(PRACTICUM_TOKEN);
        }
        if self.telegram_token.is_empty() {
            missing.push(TELEGRAM_TOKEN);
        }
        if self.telegram_chat_id.is_empty() {
            missing.push(TELEGRAM_CHAT_ID);
        }
        missing
    }

    /// True iff all required values are present.
    pub fn check(&self) -> bool {
        self.missing().is_empty()
    }
}
