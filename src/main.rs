//! Homework Review Status Bot
//!
//! Polls the Practicum homework status API and forwards review status
//! changes to a Telegram chat.

use clap::Parser;
use homework_bot::{
    client::PracticumClient,
    config::Config,
    error::BotError,
    notify::Notifier,
    poller::{Poller, SystemClock},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "homework-bot")]
#[command(about = "Forwards homework review status changes to Telegram")]
struct Cli {
    /// Env file to load before reading configuration
    #[arg(long, default_value = ".env")]
    env_file: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if dotenvy::from_filename(&cli.env_file).is_err() {
        tracing::debug!("env file {} not found, using process environment", cli.env_file);
    }

    // Preflight: every required variable must be present before the loop
    // starts. Nothing is sent to the chat on this path, the messaging
    // credential itself may be the missing piece.
    let config = Config::from_env();
    let missing = config.missing();
    if !missing.is_empty() {
        for name in &missing {
            tracing::error!(
                "Отсутствует обязательная переменная окружения: {}. \
                 Программа принудительно остановлена.",
                name
            );
        }
        return Err(BotError::MissingConfig(missing[0]).into());
    }

    tracing::info!("Starting homework status bot");

    let client = PracticumClient::new(config.practicum_token.clone())?;
    let notifier = Notifier::new(
        config.telegram_token.clone(),
        config.telegram_chat_id.clone(),
    );

    let mut poller = Poller::new(client, notifier, SystemClock);
    poller.run().await;

    Ok(())
}
