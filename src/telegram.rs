use serde::{Deserialize, Serialize};

use crate::config::{Config, HttpSettings};
use crate::error::BotError;

/// Delivers a text message to the configured user.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn send_message(&self, text: &str) -> Result<(), BotError>;
}

#[derive(Clone)]
pub struct TelegramBot {
    http: reqwest::Client,
    base_url: String,
    chat_id: String,
    send_messages: bool,
}

impl TelegramBot {
    pub fn new(
        api_url: &str,
        token: &str,
        chat_id: impl Into<String>,
        settings: &HttpSettings,
    ) -> Result<Self, BotError> {
        let http = settings
            .build_client()
            .map_err(|err| BotError::SendFailed(err.to_string()))?;
        Ok(Self {
            http,
            base_url: format!("{}/bot{}", api_url.trim_end_matches('/'), token),
            chat_id: chat_id.into(),
            send_messages: true,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, BotError> {
        Ok(Self::new(
            &config.telegram_api_url,
            &config.telegram_token,
            &config.telegram_chat_id,
            &config.http,
        )?
        .with_sending(config.send_messages))
    }

    /// With sending disabled, messages are only written to the log.
    pub fn with_sending(mut self, enabled: bool) -> Self {
        self.send_messages = enabled;
        self
    }
}

#[async_trait::async_trait]
impl Notifier for TelegramBot {
    async fn send_message(&self, text: &str) -> Result<(), BotError> {
        if !self.send_messages {
            tracing::info!(chat_id = %self.chat_id, text, "MESSAGE SENDING DISABLED - notification not sent");
            return Ok(());
        }

        let request = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
        };

        let resp = self
            .http
            .post(format!("{}/sendMessage", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|err| BotError::SendFailed(err.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|err| BotError::SendFailed(err.to_string()))?;

        if !status.is_success() {
            return Err(BotError::SendFailed(format!("{} - {}", status, body)));
        }

        let parsed: SendMessageResponse = serde_json::from_str(&body)
            .map_err(|err| BotError::SendFailed(format!("unreadable response: {}", err)))?;
        if !parsed.ok {
            return Err(BotError::SendFailed(
                parsed
                    .description
                    .unwrap_or_else(|| "Telegram reported failure".to_string()),
            ));
        }

        match parsed.result.and_then(|msg| msg.text) {
            Some(sent) if sent != text => {
                tracing::warn!(sent = %sent, expected = text, "Bot sent a different message");
            }
            _ => tracing::info!(text, "Bot sent message"),
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    result: Option<SentMessage>,
}

#[derive(Debug, Deserialize)]
struct SentMessage {
    #[serde(default)]
    text: Option<String>,
}
