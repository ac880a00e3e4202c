use std::collections::BTreeMap;
use std::iter::FromIterator;

use dx_core::errors::{DxError, ErrorInfo};
use serde::Serialize;
use serde_json::{Map, Value};

fn serde_error(code: &str, err: impl ToString) -> DxError {
    DxError::Serde(ErrorInfo::new(code, err.to_string()))
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let ordered = map
                .into_iter()
                .map(|(key, value)| (key, canonicalize(value)))
                .collect::<BTreeMap<_, _>>();
            Value::Object(Map::from_iter(ordered))
        }
        Value::Array(values) => Value::Array(values.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

/// Serializes a value into JSON bytes with object keys in sorted order.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, DxError> {
    let value = serde_json::to_value(value).map_err(|err| serde_error("dx.json.encode", err))?;
    let canonical = canonicalize(value);
    let mut bytes = Vec::new();
    serde_json::to_writer(&mut bytes, &canonical).map_err(|err| serde_error("dx.json.write", err))?;
    Ok(bytes)
}

/// Same as [`to_canonical_json_bytes`] but indented for terminals.
pub fn to_canonical_json_pretty<T: Serialize>(value: &T) -> Result<Vec<u8>, DxError> {
    let value = serde_json::to_value(value).map_err(|err| serde_error("dx.json.encode", err))?;
    let canonical = canonicalize(value);
    serde_json::to_vec_pretty(&canonical).map_err(|err| serde_error("dx.json.write", err))
}
