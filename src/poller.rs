use std::time::Duration;

use crate::config::{Config, EmptyListPolicy};
use crate::error::BotError;
use crate::practicum::HomeworkApi;
use crate::report::Report;
use crate::status::parse_record;
use crate::telegram::Notifier;
use crate::validator::validate;

/// What a single iteration decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The report changed and a notification was attempted.
    Notified(Report),
    /// The report matched the previous one.
    Unchanged,
    /// A quiet server response or a non-reportable error; state was left alone.
    Skipped,
}

/// Loop state carried from one iteration to the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollState {
    pub previous: Report,
    pub cursor: i64,
}

impl PollState {
    pub fn starting_at(cursor: i64) -> Self {
        Self {
            previous: Report::default(),
            cursor,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PollSettings {
    pub retry_interval: Duration,
    pub empty_list_policy: EmptyListPolicy,
}

impl From<&Config> for PollSettings {
    fn from(config: &Config) -> Self {
        Self {
            retry_interval: config.retry_interval,
            empty_list_policy: config.empty_list_policy,
        }
    }
}

/// Result of fetching and interpreting one response.
enum Fetched {
    Report { report: Report, current_date: Option<i64> },
    Quiet,
}

pub struct Poller<A, N> {
    api: A,
    notifier: N,
    settings: PollSettings,
    state: PollState,
}

impl<A: HomeworkApi, N: Notifier> Poller<A, N> {
    pub fn new(api: A, notifier: N, settings: PollSettings, state: PollState) -> Self {
        Self {
            api,
            notifier,
            settings,
            state,
        }
    }

    pub fn state(&self) -> &PollState {
        &self.state
    }

    /// Polls forever, sleeping the retry interval after every iteration.
    pub async fn run(&mut self) {
        tracing::info!(
            retry_secs = self.settings.retry_interval.as_secs(),
            cursor = self.state.cursor,
            "Starting homework status polling"
        );
        loop {
            self.tick().await;
            tokio::time::sleep(self.settings.retry_interval).await;
        }
    }

    /// Runs one fetch/validate/compare/notify iteration.
    pub async fn tick(&mut self) -> Outcome {
        let (current, next_cursor) = match self.fetch_report().await {
            Ok(Fetched::Report {
                report,
                current_date,
            }) => (report, Some(current_date.unwrap_or(self.state.cursor))),
            Ok(Fetched::Quiet) => return Outcome::Skipped,
            Err(err) if !err.is_reportable() => {
                tracing::info!(reason = %err, "Nothing to report this round, skipping");
                return Outcome::Skipped;
            }
            Err(err) => {
                tracing::error!(error = %err, "Homework poll failed");
                (self.error_report(&err), None)
            }
        };

        if !current.changed(&self.state.previous) {
            tracing::info!(cursor = self.state.cursor, "No new statuses in the response");
            return Outcome::Unchanged;
        }

        if let Err(err) = self.notifier.send_message(&current.output).await {
            tracing::error!(error = %err, "Notification delivery failed");
        }

        self.state.previous = current.clone();
        if let Some(next) = next_cursor {
            tracing::debug!(from = self.state.cursor, to = next, "Advancing cursor");
            self.state.cursor = next;
        }

        Outcome::Notified(current)
    }

    async fn fetch_report(&self) -> Result<Fetched, BotError> {
        let response = self.api.homework_statuses(self.state.cursor).await?;

        let batch = validate(&response)?;

        let report = match batch.latest() {
            Some(record) => {
                let parsed = parse_record(record)?;
                Report::new(parsed.homework_name.clone(), parsed.sentence())
            }
            None => match self.settings.empty_list_policy {
                EmptyListPolicy::Report => Report::no_new_statuses(),
                EmptyListPolicy::Ignore => {
                    tracing::info!("Empty homework list, leaving previous report untouched");
                    return Ok(Fetched::Quiet);
                }
            },
        };

        Ok(Fetched::Report {
            report,
            current_date: batch.current_date,
        })
    }

    fn error_report(&self, err: &BotError) -> Report {
        Report::new(
            self.state.previous.name.clone(),
            format!("Program failure: {}", err),
        )
    }
}
