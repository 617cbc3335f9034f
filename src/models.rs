use serde::Deserialize;
use serde_json::Value;

/// A single submission as returned by the homework API.
///
/// Fields stay untyped so that a missing or mistyped key can be reported as
/// a domain error rather than a generic decode failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HomeworkRecord {
    #[serde(default)]
    pub homework_name: Option<Value>,
    #[serde(default)]
    pub status: Option<Value>,
}

/// A response that passed shape validation.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeworkBatch {
    pub homeworks: Vec<Value>,
    pub current_date: Option<i64>,
}

impl HomeworkBatch {
    /// The most recent submission, if any.
    pub fn latest(&self) -> Option<&Value> {
        self.homeworks.first()
    }
}
