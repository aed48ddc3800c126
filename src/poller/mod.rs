//! Polling loop
//!
//! Drives the fetch → validate → interpret → notify cycle on a fixed
//! interval. Owns the only two pieces of mutable state in the program: the
//! poll-window cursor and the last error notification sent.
//!
//! Any failure inside a cycle lands in one error branch: the message is
//! logged, forwarded to the chat unless it repeats the previous one verbatim,
//! and the cursor is left where it was. The sleep between cycles is
//! unconditional, so a persistent upstream outage produces exactly one
//! notification and a steady retry cadence.

use crate::client::StatusApi;
use crate::error::Result;
use crate::notify::MessageSink;
use crate::{response, status};
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, warn};


/// Delay between poll cycles, in seconds.
pub const RETRY_INTERVAL_SECS: u64 = 600;

/// Wall-clock source. Injected so tests can pin the cursor without waiting.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now_unix(&self) -> i64;
}

/// System wall clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_unix(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// Poll loop over a status API and a message sink.
pub struct Poller<A, S, C> {
    api: A,
    sink: S,
    clock: C,
    retry_interval: Duration,
    cursor: i64,
    last_error_message: Option<String>,
}

impl<A: StatusApi, S: MessageSink, C: Clock> Poller<A, S, C> {
    pub fn new(api: A, sink: S, clock: C) -> Self {
        let cursor = clock.now_unix();
        Self {
            api,
            sink,
            clock,
            retry_interval: Duration::from_secs(RETRY_INTERVAL_SECS),
            cursor,
            last_error_message: None,
        }
    }

    /// Start of the next poll window.
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Run until the process is terminated. One cycle runs to completion,
    /// then the interval elapses, regardless of the cycle's outcome.
    pub async fn run(&mut self) {
        let mut interval = tokio::time::interval(self.retry_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // the first tick completes immediately
        interval.tick().await;

        loop {
            self.poll_once().await;
            interval.tick().await;
        }
    }

    /// One poll cycle with the error branch applied. Public so tests can
    /// drive iterations without the interval.
    pub async fn poll_once(&mut self) {
        if let Err(err) = self.poll_cycle().await {
            let message = format!("Сбой в работе программы: {}", err);
            error!("{}", message);

            if self.last_error_message.as_deref() != Some(message.as_str()) {
                match self.sink.send(&message).await {
                    Ok(()) => self.last_error_message = Some(message),
                    Err(send_err) => {
                        warn!("failed to deliver error notification: {}", send_err);
                    }
                }
            }
        }
    }

    async fn poll_cycle(&mut self) -> Result<()> {
        let response = self.api.fetch_statuses(self.cursor).await?;
        let homeworks = response::validate(&response)?;

        if homeworks.is_empty() {
            debug!("no new statuses");
        } else {
            for homework in &homeworks {
                let text = status::parse_status(homework)?;
                self.sink.send(&text).await?;
            }
        }

        self.cursor = self.clock.now_unix();
        Ok(())
    }
}
