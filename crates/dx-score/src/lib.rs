#![deny(missing_docs)]
#![doc = "Intersection scoring of symptom vectors against the dx disease catalog."]

/// Catalog fingerprinting.
pub mod hash;
/// Summation in NumPy pairwise order and half-even rounding.
pub mod numeric;
/// Profile scoring, reliability and ranking.
pub mod scorer;
/// Canonical JSON helpers.
pub mod serde;

pub use hash::catalog_hash;
pub use numeric::{pairwise_sum, round2};
pub use scorer::{
    diagnose, diagnose_vector, intersection, rank, score_profile, ProfileScore,
    RELIABILITY_THRESHOLD,
};
pub use crate::serde::{to_canonical_json_bytes, to_canonical_json_pretty};
