//! Boundary parsing of untyped JSON payloads

use serde_json::Value;

use crate::error::{DomainError, DomainResult, Operation};

/// A field counts as missing when it is absent, null or an empty string.
fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// Extract `keys` from `payload` as strings, in order.
///
/// Presence of every key is checked before any type is looked at, so a
/// payload that is both incomplete and mistyped reports the missing property.
pub(crate) fn required_strings<const N: usize>(
    payload: &Value,
    operation: Operation,
    keys: [&str; N],
) -> DomainResult<[String; N]> {
    if keys.iter().any(|key| is_missing(payload.get(key))) {
        return Err(DomainError::missing_property(operation));
    }

    let values: Vec<String> = keys
        .iter()
        .filter_map(|key| payload.get(key).and_then(Value::as_str))
        .map(str::to_owned)
        .collect();

    values
        .try_into()
        .map_err(|_| DomainError::data_type(operation))
}

/// Typed counterpart of [`required_strings`]: rejects empty values.
pub(crate) fn require_present(operation: Operation, values: &[&str]) -> DomainResult<()> {
    if values.iter().any(|value| value.is_empty()) {
        return Err(DomainError::missing_property(operation));
    }
    Ok(())
}
