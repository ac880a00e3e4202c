//! Compiled-in disease catalog.
//!
//! Profiles are listed in a fixed order which doubles as the tie-break order
//! when ranking. Every vector is aligned with [`crate::SYMPTOM_NAMES`].

use crate::types::DiseaseProfile;

/// Number of disease profiles in the catalog.
pub const CATALOG_LEN: usize = 10;

static CATALOG: [DiseaseProfile; CATALOG_LEN] = [
    DiseaseProfile::new(
        "Neumonía",
        [0.9, 0.3, 0.8, 0.9, 0.3, 0.9, 0.2, 0.3, 0.8, 0.7, 0.8, 0.7, 0.5, 0.4, 0.6],
    ),
    DiseaseProfile::new(
        "Bronquitis aguda",
        [0.7, 0.6, 0.9, 0.7, 0.4, 0.6, 0.5, 0.6, 0.7, 0.5, 0.6, 0.4, 0.3, 0.2, 0.4],
    ),
    DiseaseProfile::new(
        "COVID-19",
        [0.8, 0.8, 0.4, 0.6, 0.5, 0.8, 0.6, 0.7, 0.9, 0.8, 0.7, 0.6, 0.8, 0.6, 0.5],
    ),
    DiseaseProfile::new(
        "Asma",
        [0.9, 0.6, 0.4, 0.5, 0.9, 0.3, 0.2, 0.4, 0.7, 0.4, 0.3, 0.2, 0.3, 0.1, 0.2],
    ),
    DiseaseProfile::new(
        "Tuberculosis",
        [0.8, 0.5, 0.7, 0.8, 0.4, 0.8, 0.1, 0.2, 0.9, 0.9, 0.7, 0.8, 0.4, 0.2, 0.3],
    ),
    DiseaseProfile::new(
        "Enfisema pulmonar",
        [0.9, 0.4, 0.6, 0.8, 0.8, 0.3, 0.1, 0.2, 0.8, 0.6, 0.5, 0.4, 0.3, 0.2, 0.4],
    ),
    DiseaseProfile::new(
        "Sinusitis",
        [0.2, 0.3, 0.3, 0.2, 0.1, 0.6, 0.9, 0.8, 0.5, 0.4, 0.3, 0.3, 0.8, 0.5, 0.6],
    ),
    DiseaseProfile::new(
        "Gripe (Influenza)",
        [0.4, 0.5, 0.4, 0.4, 0.3, 0.9, 0.6, 0.7, 0.9, 0.8, 0.8, 0.6, 0.8, 0.7, 0.8],
    ),
    DiseaseProfile::new(
        "Legionelosis",
        [0.8, 0.4, 0.6, 0.8, 0.3, 0.9, 0.2, 0.3, 0.9, 0.8, 0.7, 0.7, 0.4, 0.3, 0.5],
    ),
    DiseaseProfile::new(
        "Fibrosis quistica",
        [0.9, 0.5, 0.8, 0.7, 0.6, 0.4, 0.5, 0.4, 0.7, 0.5, 0.3, 0.2, 0.3, 0.1, 0.2],
    ),
];

/// Returns the disease catalog in its fixed order.
pub fn catalog() -> &'static [DiseaseProfile] {
    &CATALOG
}

/// Looks up a profile by its exact display name.
pub fn profile(name: &str) -> Option<&'static DiseaseProfile> {
    CATALOG.iter().find(|profile| profile.name == name)
}
