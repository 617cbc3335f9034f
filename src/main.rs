use anyhow::{Context, Result};
use chrono::Utc;

use homework_status_bot::error::BotError;
use homework_status_bot::{
    logger, Config, PollSettings, PollState, Poller, PracticumClient, TelegramBot,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logger::init_logging();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(BotError::MissingCredential(missing)) => {
            for name in &missing {
                tracing::error!(
                    critical = true,
                    variable = *name,
                    "Missing required environment variable, bot stopped"
                );
            }
            return Err(BotError::MissingCredential(missing))
                .context("Startup configuration is incomplete");
        }
        Err(err) => return Err(err).context("Failed to load configuration"),
    };

    if config.send_messages {
        tracing::info!(chat_id = %config.telegram_chat_id, "Telegram notifications enabled");
    } else {
        tracing::info!("Telegram notifications disabled, messages will only be logged");
    }

    let api =
        PracticumClient::from_config(&config).context("Failed to build homework API client")?;
    let bot = TelegramBot::from_config(&config).context("Failed to build Telegram client")?;
    let state = PollState::starting_at(Utc::now().timestamp());

    let mut poller = Poller::new(api, bot, PollSettings::from(&config), state);
    poller.run().await;

    Ok(())
}
