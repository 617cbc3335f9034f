use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde_json::Value;

use crate::config::{Config, HttpSettings};
use crate::error::BotError;

/// Source of raw homework-status payloads.
#[async_trait::async_trait]
pub trait HomeworkApi: Send + Sync {
    async fn homework_statuses(&self, from_date: i64) -> Result<Value, BotError>;
}

#[derive(Clone)]
pub struct PracticumClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        settings: &HttpSettings,
    ) -> Result<Self, BotError> {
        Ok(Self {
            http: settings.build_client()?,
            endpoint: endpoint.into(),
            token: token.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, BotError> {
        Self::new(
            &config.practicum_endpoint,
            &config.practicum_token,
            &config.http,
        )
    }
}

#[async_trait::async_trait]
impl HomeworkApi for PracticumClient {
    async fn homework_statuses(&self, from_date: i64) -> Result<Value, BotError> {
        tracing::debug!(from_date, endpoint = %self.endpoint, "Requesting homework statuses");

        let resp = self
            .http
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if status != StatusCode::OK {
            return Err(BotError::FetchFailed {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                body,
            });
        }

        serde_json::from_str(&body)
            .map_err(|err| BotError::MalformedResponse(format!("body is not JSON: {}", err)))
    }
}
