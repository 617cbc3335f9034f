use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BotError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingCredential(Vec<&'static str>),
    #[error("API returned {status} {reason}: {body}")]
    FetchFailed {
        status: u16,
        reason: String,
        body: String,
    },
    #[error("endpoint unreachable: {0}")]
    Transport(String),
    #[error("API response has no `homeworks` key")]
    EmptyResponse,
    #[error("API response is malformed: {0}")]
    MalformedResponse(String),
    #[error("`homeworks` in the API response is not a list")]
    HomeworksNotList,
    #[error("homework record is missing `{0}`")]
    MissingField(&'static str),
    #[error("undocumented homework status: {0:?}")]
    UnknownVerdict(String),
    #[error("failed to send Telegram message: {0}")]
    SendFailed(String),
}

impl BotError {
    /// Whether the error should be folded into a report and shown to the user.
    pub fn is_reportable(&self) -> bool {
        match self {
            BotError::FetchFailed { .. }
            | BotError::Transport(_)
            | BotError::MalformedResponse(_)
            | BotError::HomeworksNotList
            | BotError::MissingField(_)
            | BotError::UnknownVerdict(_) => true,
            BotError::MissingCredential(_) | BotError::EmptyResponse | BotError::SendFailed(_) => {
                false
            }
        }
    }
}

impl From<reqwest::Error> for BotError {
    fn from(err: reqwest::Error) -> Self {
        BotError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_lists_every_name() {
        let err = BotError::MissingCredential(vec!["PRACTICUM_TOKEN", "TELEGRAM_CHAT_ID"]);
        assert_eq!(
            err.to_string(),
            "missing required environment variables: PRACTICUM_TOKEN, TELEGRAM_CHAT_ID"
        );
    }

    #[test]
    fn quiet_conditions_are_not_reported() {
        assert!(!BotError::EmptyResponse.is_reportable());
        assert!(!BotError::SendFailed("boom".into()).is_reportable());
        assert!(BotError::HomeworksNotList.is_reportable());
        assert!(BotError::UnknownVerdict("graded".into()).is_reportable());
    }
}
