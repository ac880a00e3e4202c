//! Structured error types shared across dx crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::symptoms::SYMPTOM_COUNT;

/// Stable code carried by the wrong-length symptom vector error.
pub const INVALID_INPUT_LENGTH: &str = "dx.input.length";

/// Message reported to callers when a symptom vector has the wrong length.
pub const INVALID_INPUT_LENGTH_MESSAGE: &str = "Debe proporcionar exactamente 15 síntomas.";

/// Structured payload attached to every [`DxError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (lengths, paths, keys, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the dx engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum DxError {
    /// Malformed symptom vectors or requests.
    #[error("input error: {0}")]
    Input(ErrorInfo),
    /// Serialization and payload decoding errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
    /// Configuration loading and validation errors.
    #[error("config error: {0}")]
    Config(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl DxError {
    /// Builds the error raised when a symptom vector does not hold exactly
    /// [`SYMPTOM_COUNT`] entries.
    pub fn invalid_input_length(actual: usize) -> Self {
        DxError::Input(
            ErrorInfo::new(INVALID_INPUT_LENGTH, INVALID_INPUT_LENGTH_MESSAGE)
                .with_context("expected", SYMPTOM_COUNT.to_string())
                .with_context("actual", actual.to_string()),
        )
    }

    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            DxError::Input(info) | DxError::Serde(info) | DxError::Config(info) => info,
        }
    }

    /// Returns `true` when the error reports a wrong-length symptom vector.
    pub fn is_invalid_input_length(&self) -> bool {
        matches!(self, DxError::Input(info) if info.code == INVALID_INPUT_LENGTH)
    }

    /// Returns `true` when the failure is attributable to the caller's input.
    pub fn is_client_error(&self) -> bool {
        matches!(self, DxError::Input(_))
    }
}
