//! Canonical symptom order and the fixed-width intensity vector built on it.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::errors::DxError;

/// Number of symptom slots in every vector.
pub const SYMPTOM_COUNT: usize = 15;

/// Symptom names in canonical slot order.
///
/// Disease profiles and user vectors are positionally aligned with this list.
pub const SYMPTOM_NAMES: [&str; SYMPTOM_COUNT] = [
    "Dificultad para respirar",
    "Tos seca",
    "Tos con flema",
    "Dolor en el pecho",
    "Sibilancias",
    "Fiebre",
    "Congestión nasal",
    "Dolor de garganta",
    "Fatiga",
    "Sudoración nocturna",
    "Escalofríos",
    "Pérdida del apetito",
    "Dolor de cabeza",
    "Náuseas",
    "Dolor muscular",
];

/// Returns the slot index of a symptom name, if it is part of the canonical order.
///
/// Matching is exact: accents and capitalisation are significant.
pub fn slot_of(name: &str) -> Option<usize> {
    SYMPTOM_NAMES.iter().position(|candidate| *candidate == name)
}

/// Ordered intensities for the [`SYMPTOM_COUNT`] canonical symptoms.
///
/// Values are nominally in `[0, 1]` but the range is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SymptomVector([f64; SYMPTOM_COUNT]);

impl SymptomVector {
    /// Wraps an already aligned array of intensities.
    pub const fn new(values: [f64; SYMPTOM_COUNT]) -> Self {
        Self(values)
    }

    /// Vector with every intensity set to zero.
    pub const fn zeros() -> Self {
        Self([0.0; SYMPTOM_COUNT])
    }

    /// Validates the length of an arbitrary slice and copies it into a vector.
    pub fn from_slice(values: &[f64]) -> Result<Self, DxError> {
        let array: [f64; SYMPTOM_COUNT] = values
            .try_into()
            .map_err(|_| DxError::invalid_input_length(values.len()))?;
        Ok(Self(array))
    }

    /// Returns the intensities as a slice in canonical order.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Returns the underlying array.
    pub fn values(&self) -> &[f64; SYMPTOM_COUNT] {
        &self.0
    }

    /// Iterates `(symptom name, intensity)` pairs in canonical order.
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        SYMPTOM_NAMES.iter().copied().zip(self.0.iter().copied())
    }
}

impl Default for SymptomVector {
    fn default() -> Self {
        Self::zeros()
    }
}

impl From<[f64; SYMPTOM_COUNT]> for SymptomVector {
    fn from(values: [f64; SYMPTOM_COUNT]) -> Self {
        Self(values)
    }
}

impl Index<usize> for SymptomVector {
    type Output = f64;

    fn index(&self, slot: usize) -> &Self::Output {
        &self.0[slot]
    }
}
