//! Request boundary for the dx diagnosis engine.
//!
//! Turns a JSON object keyed by symptom name into the canonical vector,
//! invokes the scorer and wraps the outcome in the `results` / `error`
//! envelope with permissive cross-origin headers. No listener is bundled:
//! an HTTP stack forwards a [`Request`] and writes back the [`Response`].

mod config;
mod envelope;
pub mod request;
mod service;

pub use config::{load_config, CorsConfig, LoggingConfig, OutputConfig, ServiceConfig};
pub use envelope::{Envelope, Status};
pub use request::{canonical_values, parse_request};
pub use service::{DiagnosisService, Request, Response, DIAGNOSE_PATH};
