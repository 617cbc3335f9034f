//! Polls the homework review API and reports status changes over Telegram.

pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod poller;
pub mod practicum;
pub mod report;
pub mod status;
pub mod telegram;
pub mod validator;

pub use config::{Config, EmptyListPolicy, HttpSettings};
pub use error::BotError;
pub use poller::{Outcome, PollSettings, PollState, Poller};
pub use practicum::{HomeworkApi, PracticumClient};
pub use report::Report;
pub use telegram::{Notifier, TelegramBot};
