use serde_json::Value;

use crate::error::BotError;
use crate::models::HomeworkBatch;

/// Checks the outer shape of an API payload.
///
/// Individual records are left untouched; they are inspected by
/// [`crate::status::parse_status`] once the loop decides which one to report.
pub fn validate(response: &Value) -> Result<HomeworkBatch, BotError> {
    let object = response.as_object().ok_or_else(|| {
        BotError::MalformedResponse(format!("expected a JSON object, got {}", kind_of(response)))
    })?;

    let homeworks = match object.get("homeworks") {
        None => return Err(BotError::EmptyResponse),
        Some(Value::Array(items)) => items.clone(),
        Some(_) => return Err(BotError::HomeworksNotList),
    };

    let current_date = object.get("current_date").and_then(Value::as_i64);
    if current_date.is_none() {
        tracing::debug!("API response carries no usable current_date");
    }

    Ok(HomeworkBatch {
        homeworks,
        current_date,
    })
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
