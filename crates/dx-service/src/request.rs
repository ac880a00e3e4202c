//! Canonicalisation of a symptom-name keyed JSON object into slot order.

use dx_core::errors::{DxError, ErrorInfo};
use dx_core::SYMPTOM_NAMES;
use serde_json::{Map, Value};

fn request_error(code: &str, message: impl Into<String>) -> DxError {
    DxError::Serde(ErrorInfo::new(code, message))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn symptom_error(code: &str, name: &str, message: String) -> DxError {
    DxError::Serde(ErrorInfo::new(code, message).with_context("symptom", name))
}

/// Converts one intensity value. Booleans count as 1 and 0.
fn intensity(name: &str, value: &Value) -> Result<f64, DxError> {
    match value {
        Value::Number(number) => number.as_f64().ok_or_else(|| {
            symptom_error(
                "dx.request.number",
                name,
                format!("intensity for {name:?} is not representable"),
            )
        }),
        Value::Bool(flag) => Ok(if *flag { 1.0 } else { 0.0 }),
        other => Err(symptom_error(
            "dx.request.non_numeric",
            name,
            format!(
                "intensity for {name:?} must be a number, got {}",
                value_kind(other)
            ),
        )),
    }
}

/// Maps a symptom object onto the canonical slot order.
///
/// Missing names default to 0 and unknown names are ignored. The returned
/// vector always holds one entry per canonical symptom.
pub fn canonical_values(symptoms: &Map<String, Value>) -> Result<Vec<f64>, DxError> {
    let unknown = symptoms
        .keys()
        .filter(|key| dx_core::slot_of(key).is_none())
        .count();
    if unknown > 0 {
        log::debug!("ignoring {unknown} unrecognised symptom names");
    }
    SYMPTOM_NAMES
        .iter()
        .map(|name| match symptoms.get(*name) {
            Some(value) => intensity(name, value),
            None => Ok(0.0),
        })
        .collect()
}

/// Parses a request body and canonicalises it.
///
/// Malformed JSON, a non-object body and non-numeric intensities are reported
/// as serialization failures; they are never input-length errors.
pub fn parse_request(body: &[u8]) -> Result<Vec<f64>, DxError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|err| request_error("dx.request.json", err.to_string()))?;
    match &value {
        Value::Object(map) => canonical_values(map),
        other => Err(request_error(
            "dx.request.shape",
            format!("request body must be a JSON object, got {}", value_kind(other)),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_names_default_to_zero() {
        let values = parse_request(br#"{"Fiebre": 0.8, "Dolor muscular": 1}"#).unwrap();
        assert_eq!(values.len(), 15);
        assert_eq!(values[5], 0.8);
        assert_eq!(values[14], 1.0);
        assert_eq!(values.iter().filter(|v| **v == 0.0).count(), 13);
    }

    #[test]
    fn unknown_names_are_ignored() {
        let values = parse_request(br#"{"Hipo": 1.0, "fiebre": 1.0}"#).unwrap();
        assert!(values.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn booleans_count_as_unit_intensity() {
        let values = parse_request(br#"{"Tos seca": true, "Fatiga": false}"#).unwrap();
        assert_eq!(values[1], 1.0);
        assert_eq!(values[8], 0.0);
    }

    #[test]
    fn non_numeric_values_fail_with_symptom_context() {
        let err = parse_request(br#"{"Fiebre": "alta"}"#).unwrap_err();
        assert_eq!(err.info().code, "dx.request.non_numeric");
        assert_eq!(err.info().context["symptom"], "Fiebre");
        assert!(!err.is_client_error());
        assert!(parse_request(br#"{"Fiebre": null}"#).is_err());
        assert!(parse_request(br#"{"Fiebre": [1]}"#).is_err());
    }

    #[test]
    fn body_must_be_an_object() {
        assert_eq!(
            parse_request(b"[0.1, 0.2]").unwrap_err().info().code,
            "dx.request.shape"
        );
        assert_eq!(parse_request(b"{").unwrap_err().info().code, "dx.request.json");
        assert_eq!(parse_request(b"").unwrap_err().info().code, "dx.request.json");
    }

    #[test]
    fn overflowing_literals_fail_to_parse() {
        let err = parse_request(br#"{"Fiebre": 1e400}"#).unwrap_err();
        assert_eq!(err.info().code, "dx.request.json");
        assert!(!err.is_client_error());
        assert_eq!(parse_request(br#"{"Fiebre": 1e300}"#).unwrap()[5], 1e300);
    }
}
