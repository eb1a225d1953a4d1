//! Response body shape checks

use serde_json::Value;

use super::StepError;

/// Look up a dotted path such as `user.email`
pub fn field<'a>(body: &'a Value, path: &str, step: &str) -> Result<&'a Value, StepError> {
    path.split('.')
        .try_fold(body, |value, key| value.get(key))
        .filter(|value| !value.is_null())
        .ok_or_else(|| StepError::missing_field(step, path))
}

/// Require a list under `key`
pub fn list<'a>(body: &'a Value, key: &str, step: &str) -> Result<&'a Vec<Value>, StepError> {
    field(body, key, step)?
        .as_array()
        .ok_or_else(|| StepError::missing_field(step, key))
}

/// Require an identifier; string and numeric ids are both accepted
pub fn id(body: &Value, path: &str, step: &str) -> Result<String, StepError> {
    match field(body, path, step)? {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(StepError::missing_field(step, path)),
    }
}

/// Render a scalar for a report message
pub fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
