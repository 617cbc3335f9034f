use std::env;
use std::time::Duration;

use crate::error::BotError;

pub const DEFAULT_RETRY_SECS: u64 = 600;
pub const DEFAULT_PRACTICUM_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

const REQUIRED: [&str; 3] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

/// What to do when the API answers with an empty `homeworks` list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyListPolicy {
    /// Compare the "no new statuses" sentinel like any other report.
    #[default]
    Report,
    /// Log only and leave the previous report as it was.
    Ignore,
}

impl EmptyListPolicy {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "report" => Some(EmptyListPolicy::Report),
            "ignore" => Some(EmptyListPolicy::Ignore),
            _ => None,
        }
    }
}

/// Timeouts shared by every outbound HTTP client.
#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl HttpSettings {
    pub fn build_client(&self) -> reqwest::Result<reqwest::Client> {
        reqwest::Client::builder()
            .connect_timeout(self.connect_timeout)
            .timeout(self.request_timeout)
            .build()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub practicum_endpoint: String,
    pub telegram_api_url: String,
    pub retry_interval: Duration,
    pub empty_list_policy: EmptyListPolicy,
    pub send_messages: bool,
    pub http: HttpSettings,
}

impl Config {
    pub fn from_env() -> Result<Self, BotError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    ///
    /// Every missing credential is collected before failing so the caller can
    /// report all of them at once.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BotError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| lookup(key).filter(|val| !val.trim().is_empty());

        let missing: Vec<&'static str> = REQUIRED
            .iter()
            .copied()
            .filter(|key| required(*key).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(BotError::MissingCredential(missing));
        }

        let secs = |key: &str, default: u64| match lookup(key) {
            Some(raw) => raw.trim().parse::<u64>().unwrap_or_else(|_| {
                tracing::warn!(key, value = %raw, "Invalid number of seconds, using default");
                default
            }),
            None => default,
        };
        let retry_secs = secs("RETRY_TIME", DEFAULT_RETRY_SECS);
        let request_timeout_secs = secs("REQUEST_TIMEOUT", DEFAULT_REQUEST_TIMEOUT_SECS);

        let empty_list_policy = match lookup("HOMEWORK_EMPTY_LIST") {
            Some(raw) => EmptyListPolicy::parse(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "Invalid HOMEWORK_EMPTY_LIST, using default");
                EmptyListPolicy::default()
            }),
            None => EmptyListPolicy::default(),
        };

        let send_messages = lookup("SEND_MESSAGES")
            .map(|val| !val.trim().eq_ignore_ascii_case("false"))
            .unwrap_or(true);

        Ok(Self {
            practicum_token: required("PRACTICUM_TOKEN").unwrap_or_default(),
            telegram_token: required("TELEGRAM_TOKEN").unwrap_or_default(),
            telegram_chat_id: required("TELEGRAM_CHAT_ID").unwrap_or_default(),
            practicum_endpoint: lookup("PRACTICUM_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_PRACTICUM_ENDPOINT.to_string()),
            telegram_api_url: lookup("TELEGRAM_API_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
            retry_interval: Duration::from_secs(retry_secs),
            empty_list_policy,
            send_messages,
            http: HttpSettings {
                request_timeout: Duration::from_secs(request_timeout_secs),
                ..HttpSettings::default()
            },
        })
    }
}
