use serde::{Deserialize, Serialize};

use crate::symptoms::SymptomVector;

/// Reference presentation of a disease: a name plus its expected intensity
/// per canonical symptom slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiseaseProfile {
    /// Display name reported in diagnosis results.
    pub name: &'static str,
    /// Reference severity per symptom slot, each value in `[0, 1]`.
    pub symptoms: SymptomVector,
}

impl DiseaseProfile {
    /// Creates a profile from a name and an aligned intensity array.
    pub const fn new(name: &'static str, symptoms: [f64; crate::SYMPTOM_COUNT]) -> Self {
        Self {
            name,
            symptoms: SymptomVector::new(symptoms),
        }
    }
}

/// Scored match between a user vector and one disease profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisResult {
    /// Name of the matched disease.
    pub disease: String,
    /// Sum of element-wise minimums, rounded to two decimals.
    pub score: f64,
    /// Whether the score reached the reliability threshold.
    pub is_reliable: bool,
    /// Score as a percentage of the disease maximum, rounded to two decimals.
    pub reliability_percentage: f64,
}
