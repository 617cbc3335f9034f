use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::error::BotError;
use crate::models::HomeworkRecord;

/// Review outcomes the bot knows how to describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Approved,
    Reviewing,
    Rejected,
}

impl Verdict {
    pub fn message(self) -> &'static str {
        match self {
            Verdict::Approved => "Review complete: the reviewer liked everything. Hooray!",
            Verdict::Reviewing => "The work has been taken for review by the reviewer.",
            Verdict::Rejected => "Review complete: the reviewer left some remarks.",
        }
    }
}

impl FromStr for Verdict {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(Verdict::Approved),
            "reviewing" => Ok(Verdict::Reviewing),
            "rejected" => Ok(Verdict::Rejected),
            other => Err(BotError::UnknownVerdict(other.to_string())),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A record that named a submission and carried a known verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedStatus {
    pub homework_name: String,
    pub verdict: Verdict,
}

impl ParsedStatus {
    pub fn sentence(&self) -> String {
        format!(
            "Status of homework \"{}\" changed. {}",
            self.homework_name, self.verdict
        )
    }
}

pub fn parse_record(record: &Value) -> Result<ParsedStatus, BotError> {
    if !record.is_object() {
        return Err(BotError::MissingField("homework_name"));
    }
    let record: HomeworkRecord = serde_json::from_value(record.clone())
        .map_err(|_| BotError::MissingField("homework_name"))?;

    let homework_name = match record.homework_name {
        Some(Value::String(name)) => name,
        _ => return Err(BotError::MissingField("homework_name")),
    };
    let verdict = match record.status {
        Some(Value::String(status)) => status.parse::<Verdict>()?,
        Some(other) => return Err(BotError::UnknownVerdict(other.to_string())),
        None => return Err(BotError::UnknownVerdict(String::new())),
    };

    Ok(ParsedStatus {
        homework_name,
        verdict,
    })
}

/// Turns a single homework record into the sentence sent to the user.
pub fn parse_status(record: &Value) -> Result<String, BotError> {
    parse_record(record).map(|parsed| parsed.sentence())
}
