//! Homework Review Status Bot
//!
//! Polls the Practicum homework status API and forwards review status
//! changes to a Telegram chat.
//!
//! ## Architecture
//!
//! ```text
//! Poller → PracticumClient → response::validate → status::parse_status → Notifier
//!   ↑                                                                       ↓
//!   └────────── deduplicated error notifications ← operational errors ──────┘
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod notify;
pub mod poller;
pub mod response;
pub mod status;

#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod error_tests;
#[cfg(test)]
mod status_tests;
