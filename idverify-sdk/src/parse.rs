//! Field accessors shared by the response parsers.
//!
//! Required accessors fail with a schema error naming the field and the
//! expected type. Optional accessors pass values through when they have the
//! right shape and yield `None` otherwise.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::error::{SdkError, SdkResult};

pub(crate) fn require_str(value: &Value, field: &str) -> SdkResult<String> {
    value
        .get(field)
        .and_then(Value::as_str)
        .map(ToString::to_string)
        .ok_or_else(|| SdkError::Schema(format!("{field} must be a string")))
}

pub(crate) fn require_i64(value: &Value, field: &str) -> SdkResult<i64> {
    value
        .get(field)
        .and_then(Value::as_i64)
        .ok_or_else(|| SdkError::Schema(format!("{field} must be an integer")))
}

pub(crate) fn opt_str(value: &Value, field: &str) -> Option<String> {
    value
        .get(field)
        .and_then(Value::as_str)
        .map(ToString::to_string)
}

pub(crate) fn opt_i64(value: &Value, field: &str) -> Option<i64> {
    value.get(field).and_then(Value::as_i64)
}

pub(crate) fn opt_datetime(value: &Value, field: &str) -> Option<DateTime<Utc>> {
    value
        .get(field)
        .and_then(Value::as_str)
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|parsed| parsed.with_timezone(&Utc))
}

/// Elements of an array field; absent or non-array fields read as empty
pub(crate) fn array<'a>(value: &'a Value, field: &str) -> &'a [Value] {
    value
        .get(field)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Object field, absent or `null` read as `None`
pub(crate) fn object<'a>(value: &'a Value, field: &str) -> Option<&'a Value> {
    value.get(field).filter(|inner| inner.is_object())
}
