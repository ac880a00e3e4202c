use dx_core::DiagnosisResult;
use serde::{Deserialize, Serialize};

/// Status classes produced by the boundary, mirroring HTTP semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Ranked results produced.
    Ok,
    /// The caller's input was rejected.
    BadRequest,
    /// No route for the requested path.
    NotFound,
    /// Route exists but not for this method.
    MethodNotAllowed,
    /// Unexpected failure while handling the request.
    InternalServerError,
}

impl Status {
    /// Numeric HTTP status code.
    pub fn code(self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::BadRequest => 400,
            Status::NotFound => 404,
            Status::MethodNotAllowed => 405,
            Status::InternalServerError => 500,
        }
    }

    /// Canonical reason phrase.
    pub fn reason(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::BadRequest => "Bad Request",
            Status::NotFound => "Not Found",
            Status::MethodNotAllowed => "Method Not Allowed",
            Status::InternalServerError => "Internal Server Error",
        }
    }

    /// Whether the status denotes success.
    pub fn is_success(self) -> bool {
        matches!(self, Status::Ok)
    }
}

/// Top-level JSON object returned to callers.
///
/// Serializes as `{"results": [...]}` or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Envelope {
    /// Successful diagnosis, ranked by score.
    Results {
        /// Ranked per-disease results.
        results: Vec<DiagnosisResult>,
    },
    /// Failure description.
    Error {
        /// Human readable message.
        error: String,
    },
}

impl Envelope {
    /// Wraps a ranked result list.
    pub fn results(results: Vec<DiagnosisResult>) -> Self {
        Envelope::Results { results }
    }

    /// Wraps an error message.
    pub fn error(message: impl Into<String>) -> Self {
        Envelope::Error {
            error: message.into(),
        }
    }

    /// Returns the ranked list for a successful envelope.
    pub fn as_results(&self) -> Option<&[DiagnosisResult]> {
        match self {
            Envelope::Results { results } => Some(results.as_slice()),
            Envelope::Error { .. } => None,
        }
    }

    /// Returns the message for an error envelope.
    pub fn as_error(&self) -> Option<&str> {
        match self {
            Envelope::Error { error } => Some(error.as_str()),
            Envelope::Results { .. } => None,
        }
    }
}
