pub mod api_structs;

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    /// The caller handed us something that is not a collection at all.
    /// This is a contract violation, not a per-record tolerance.
    #[error("expected a JSON array of records, got {found}")]
    NotACollection { found: &'static str },

    #[error("failed to parse payload: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read payload: {0}")]
    Io(#[from] std::io::Error)
}

/// Decodes a JSON payload into a collection of records.
///
/// The payload must be a JSON array; anything else is a hard `DataError`.
/// Individual elements that fail to decode are dropped with a warning so one
/// malformed record cannot blank an entire page.
pub fn decode_collection<T: DeserializeOwned>(payload: &str) -> Result<Vec<T>, DataError> {
    let value: Value = serde_json::from_str(payload)?;
    decode_value(value)
}

/// Same as `decode_collection`, for payloads already parsed into a `Value`.
pub fn decode_value<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, DataError> {
    let elements = match value {
        Value::Array(elements) => elements,
        other => {
            return Err(DataError::NotACollection {
                found: json_type_name(&other)
            })
        }
    };

    let expected = elements.len();
    let mut records = Vec::with_capacity(expected);
    for (index, element) in elements.into_iter().enumerate() {
        match serde_json::from_value::<T>(element) {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::warn!("dropping malformed record at index {}: {}", index, e);
            }
        }
    }

    if records.len() < expected {
        tracing::warn!("decoded {} of {} records", records.len(), expected);
    }

    Ok(records)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object"
    }
}
