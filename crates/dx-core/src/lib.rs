#![deny(missing_docs)]
#![doc = "Core types for the dx diagnosis engine: canonical symptom order, the compiled-in disease catalog and the shared error surface."]

pub mod catalog;
pub mod errors;
pub mod provenance;
pub mod symptoms;
mod types;

pub use catalog::{catalog, profile, CATALOG_LEN};
pub use errors::{DxError, ErrorInfo};
pub use provenance::{SchemaVersion, RESPONSE_SCHEMA};
pub use symptoms::{slot_of, SymptomVector, SYMPTOM_COUNT, SYMPTOM_NAMES};
pub use types::{DiagnosisResult, DiseaseProfile};
