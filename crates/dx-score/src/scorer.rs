use std::cmp::Ordering;

use dx_core::{catalog, DiagnosisResult, DiseaseProfile, DxError, SymptomVector, SYMPTOM_COUNT};
use serde::{Deserialize, Serialize};

use crate::numeric::{pairwise_sum, round2};

/// Fraction of a disease's maximum score at which a match is flagged reliable.
pub const RELIABILITY_THRESHOLD: f64 = 0.7;

/// Unrounded outcome of scoring one profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileScore {
    /// Sum of element-wise minimums between user and profile vectors.
    pub score: f64,
    /// Sum of the profile's own vector.
    pub max_score: f64,
    /// `score / max_score * 100`, or zero for a degenerate profile.
    pub reliability_percentage: f64,
    /// Threshold outcome.
    pub is_reliable: bool,
}

impl ProfileScore {
    /// Whether the profile's reference vector sums to zero.
    pub fn is_degenerate(&self) -> bool {
        self.max_score == 0.0
    }

    /// Rounds the score and percentage for output under the given disease name.
    pub fn into_result(self, disease: &str) -> DiagnosisResult {
        DiagnosisResult {
            disease: disease.to_string(),
            score: round2(self.score),
            is_reliable: self.is_reliable,
            reliability_percentage: round2(self.reliability_percentage),
        }
    }
}

/// Element-wise minimum of the user vector and a reference vector.
pub fn intersection(user: &SymptomVector, reference: &SymptomVector) -> [f64; SYMPTOM_COUNT] {
    let mut out = [0.0; SYMPTOM_COUNT];
    for (slot, value) in out.iter_mut().enumerate() {
        *value = user[slot].min(reference[slot]);
    }
    out
}

/// Scores a single profile against a user vector without rounding.
pub fn score_profile(user: &SymptomVector, profile: &DiseaseProfile) -> ProfileScore {
    let score = pairwise_sum(&intersection(user, &profile.symptoms));
    let max_score = pairwise_sum(profile.symptoms.values());

    if max_score == 0.0 {
        log::warn!(
            "profile {:?} has an all-zero reference vector; reporting zero reliability",
            profile.name
        );
        return ProfileScore {
            score,
            max_score,
            reliability_percentage: 0.0,
            is_reliable: score == 0.0,
        };
    }

    let is_reliable = (score >= max_score * RELIABILITY_THRESHOLD) || (score == max_score);
    ProfileScore {
        score,
        max_score,
        reliability_percentage: (score / max_score) * 100.0,
        is_reliable,
    }
}

/// Sorts results by score, highest first. Equal scores keep their input order.
///
/// Scores compare numerically, so `0.0` and `-0.0` tie.
pub fn rank(results: &mut [DiagnosisResult]) {
    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
}

/// Scores `user` against every profile in `profiles` and returns the ranked list.
pub fn diagnose_vector(user: &SymptomVector, profiles: &[DiseaseProfile]) -> Vec<DiagnosisResult> {
    let mut results: Vec<DiagnosisResult> = profiles
        .iter()
        .map(|profile| score_profile(user, profile).into_result(profile.name))
        .collect();
    rank(&mut results);
    if let Some(top) = results.first() {
        log::debug!(
            "scored {} profiles; top match {} ({:.2}%)",
            results.len(),
            top.disease,
            top.reliability_percentage
        );
    }
    results
}

/// Scores a canonical symptom vector against the compiled-in catalog.
///
/// Fails with an invalid-length input error unless `user` holds exactly
/// [`SYMPTOM_COUNT`] values. No partial results are produced.
pub fn diagnose(user: &[f64]) -> Result<Vec<DiagnosisResult>, DxError> {
    let vector = SymptomVector::from_slice(user)?;
    Ok(diagnose_vector(&vector, catalog()))
}
