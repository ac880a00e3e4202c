use dx_core::{DiseaseProfile, SYMPTOM_NAMES};
use sha2::{Digest, Sha256};

fn update_str(hasher: &mut Sha256, value: &str) {
    hasher.update((value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}

/// Computes a SHA-256 fingerprint over the symptom order and every profile.
///
/// Two builds that report the same fingerprint produce identical scores for
/// identical input.
pub fn catalog_hash(profiles: &[DiseaseProfile]) -> String {
    let mut hasher = Sha256::new();
    hasher.update((SYMPTOM_NAMES.len() as u64).to_le_bytes());
    for name in SYMPTOM_NAMES {
        update_str(&mut hasher, name);
    }
    hasher.update((profiles.len() as u64).to_le_bytes());
    for profile in profiles {
        update_str(&mut hasher, profile.name);
        for value in profile.symptoms.as_slice() {
            hasher.update(value.to_bits().to_le_bytes());
        }
    }
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_stable_and_value_sensitive() {
        let catalog = dx_core::catalog();
        let first = catalog_hash(catalog);
        assert_eq!(first, catalog_hash(catalog));
        assert_eq!(first.len(), 64);

        let mut altered = catalog.to_vec();
        altered[0] = DiseaseProfile::new(altered[0].name, [0.5; dx_core::SYMPTOM_COUNT]);
        assert_ne!(first, catalog_hash(&altered));

        altered.swap(0, 1);
        assert_ne!(catalog_hash(&catalog[..2]), catalog_hash(&altered[..2]));
    }
}
