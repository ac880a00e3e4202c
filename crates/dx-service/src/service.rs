use dx_core::DxError;
use dx_score::{diagnose, to_canonical_json_bytes, to_canonical_json_pretty};
use serde_json::Value;

use crate::config::ServiceConfig;
use crate::envelope::{Envelope, Status};
use crate::request::parse_request;

/// Path served by the diagnosis route.
pub const DIAGNOSE_PATH: &str = "/diagnose";

/// Transport-neutral request handed over by an HTTP stack or the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Upper-case method name.
    pub method: String,
    /// Request path, optionally with a query string.
    pub path: String,
    /// Raw body bytes.
    pub body: Vec<u8>,
}

impl Request {
    /// Creates a request; the method is normalised to upper case.
    pub fn new(method: impl Into<String>, path: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        let method: String = method.into();
        Self {
            method: method.to_ascii_uppercase(),
            path: path.into(),
            body: body.into(),
        }
    }

    /// Shorthand for a `POST` request.
    pub fn post(path: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self::new("POST", path, body)
    }

    fn route(&self) -> &str {
        self.path.split('?').next().unwrap_or_default()
    }
}

/// Response to forward unchanged to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Status class.
    pub status: Status,
    /// Header name and value pairs in emission order.
    pub headers: Vec<(String, String)>,
    /// Serialized body; empty for preflight responses.
    pub body: Vec<u8>,
}

impl Response {
    /// Looks up a header value, ignoring ASCII case in the name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Numeric status code.
    pub fn status_code(&self) -> u16 {
        self.status.code()
    }
}

/// Stateless request boundary around the scorer.
#[derive(Debug, Clone, Default)]
pub struct DiagnosisService {
    config: ServiceConfig,
}

impl DiagnosisService {
    /// Creates a service from a validated configuration.
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Runs a diagnosis on a JSON symptom object and classifies the outcome.
    ///
    /// Input errors map to [`Status::BadRequest`]; any other failure maps to
    /// [`Status::InternalServerError`] with the failure message.
    pub fn diagnose_body(&self, body: &[u8]) -> (Status, Envelope) {
        match parse_request(body).and_then(|values| diagnose(&values)) {
            Ok(results) => (Status::Ok, Envelope::results(results)),
            Err(err) => classify(&err),
        }
    }

    /// Dispatches a request to the diagnosis route or a routing error.
    pub fn handle(&self, request: &Request) -> Response {
        if request.route() != DIAGNOSE_PATH {
            log::debug!("no route for {} {}", request.method, request.path);
            return self.render(Status::NotFound, &Envelope::error("not found"));
        }
        match request.method.as_str() {
            "POST" => {
                let (status, envelope) = self.diagnose_body(&request.body);
                self.render(status, &envelope)
            }
            "OPTIONS" => self.preflight(),
            other => {
                log::debug!("method {other} not allowed on {DIAGNOSE_PATH}");
                let mut response =
                    self.render(Status::MethodNotAllowed, &Envelope::error("method not allowed"));
                response
                    .headers
                    .push(("Allow".into(), self.config.cors.allow_methods.join(", ")));
                response
            }
        }
    }

    /// Serializes an envelope into a response carrying the CORS origin header.
    pub fn render(&self, status: Status, envelope: &Envelope) -> Response {
        let encoded = if self.config.output.pretty {
            to_canonical_json_pretty(envelope)
        } else {
            to_canonical_json_bytes(envelope)
        };
        let (status, body) = match encoded {
            Ok(body) => (status, body),
            Err(err) => {
                log::error!("failed to encode response: {err}");
                (Status::InternalServerError, fallback_body(&err))
            }
        };
        let mut headers = self.cors_headers();
        headers.push(("Content-Type".into(), "application/json".into()));
        Response {
            status,
            headers,
            body,
        }
    }

    fn preflight(&self) -> Response {
        let cors = &self.config.cors;
        let mut headers = self.cors_headers();
        headers.push((
            "Access-Control-Allow-Methods".into(),
            cors.allow_methods.join(", "),
        ));
        headers.push((
            "Access-Control-Allow-Headers".into(),
            cors.allow_headers.join(", "),
        ));
        Response {
            status: Status::Ok,
            headers,
            body: Vec::new(),
        }
    }

    fn cors_headers(&self) -> Vec<(String, String)> {
        vec![(
            "Access-Control-Allow-Origin".into(),
            self.config.cors.allow_origin.clone(),
        )]
    }
}

fn classify(err: &DxError) -> (Status, Envelope) {
    let message = err.info().message.clone();
    if err.is_client_error() {
        log::warn!("rejected diagnosis request: {err}");
        (Status::BadRequest, Envelope::error(message))
    } else {
        log::error!("diagnosis request failed: {err}");
        (Status::InternalServerError, Envelope::error(message))
    }
}

fn fallback_body(err: &DxError) -> Vec<u8> {
    format!("{{\"error\":{}}}", Value::String(err.info().message.clone())).into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dx_core::errors::ErrorInfo;

    #[test]
    fn input_errors_are_client_errors() {
        let (status, envelope) = classify(&DxError::invalid_input_length(14));
        assert_eq!(status.code(), 400);
        assert_eq!(
            envelope.as_error(),
            Some("Debe proporcionar exactamente 15 síntomas.")
        );
    }

    #[test]
    fn other_errors_are_server_errors() {
        let err = DxError::Config(ErrorInfo::new("dx.config.log_level", "unknown level"));
        let (status, envelope) = classify(&err);
        assert_eq!(status.code(), 500);
        assert_eq!(envelope.as_error(), Some("unknown level"));
    }

    #[test]
    fn fallback_body_is_valid_json() {
        let err = DxError::Serde(ErrorInfo::new("x", "quote \" inside"));
        let parsed: Value = serde_json::from_slice(&fallback_body(&err)).unwrap();
        assert_eq!(parsed["error"], "quote \" inside");
    }

    #[test]
    fn query_string_is_ignored_for_routing() {
        assert_eq!(Request::post("/diagnose?lang=es", "{}").route(), "/diagnose");
    }
}
