use std::collections::BTreeSet;

use dx_core::{catalog, SymptomVector, SYMPTOM_COUNT};
use dx_score::{diagnose, round2, score_profile, RELIABILITY_THRESHOLD};
use proptest::prelude::*;

fn intensities() -> impl Strategy<Value = [f64; SYMPTOM_COUNT]> {
    prop::array::uniform15(-1.0f64..=2.0)
}

proptest! {
    #[test]
    fn one_result_per_catalog_entry(user in intensities()) {
        let results = diagnose(&user).unwrap();
        prop_assert_eq!(results.len(), catalog().len());
        let names: BTreeSet<_> = results.iter().map(|r| r.disease.as_str()).collect();
        let expected: BTreeSet<_> = catalog().iter().map(|p| p.name).collect();
        prop_assert_eq!(names, expected);
    }

    #[test]
    fn results_are_non_increasing_by_score(user in intensities()) {
        let results = diagnose(&user).unwrap();
        for pair in results.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn ties_keep_catalog_order(user in intensities()) {
        let results = diagnose(&user).unwrap();
        let position = |name: &str| catalog().iter().position(|p| p.name == name).unwrap();
        for pair in results.windows(2) {
            if pair[0].score == pair[1].score {
                prop_assert!(position(&pair[0].disease) < position(&pair[1].disease));
            }
        }
    }

    #[test]
    fn percentage_and_reliability_follow_raw_scores(user in intensities()) {
        let vector = SymptomVector::new(user);
        let results = diagnose(&user).unwrap();
        for profile in catalog() {
            let raw = score_profile(&vector, profile);
            let result = results.iter().find(|r| r.disease == profile.name).unwrap();
            let expected_pct = raw.score / raw.max_score * 100.0;
            prop_assert!((result.reliability_percentage - expected_pct).abs() <= 0.01);
            prop_assert_eq!(result.reliability_percentage, round2(expected_pct));
            prop_assert!((result.score - raw.score).abs() <= 0.005 + 1e-9);
            let expected_reliable =
                raw.score >= RELIABILITY_THRESHOLD * raw.max_score || raw.score == raw.max_score;
            prop_assert_eq!(result.is_reliable, expected_reliable);
        }
    }

    #[test]
    fn full_coverage_forces_reliability(user in intensities(), index in 0usize..10) {
        let profile = &catalog()[index];
        let mut covering = user;
        for (slot, value) in covering.iter_mut().enumerate() {
            *value = value.max(profile.symptoms[slot]);
        }
        let raw = score_profile(&SymptomVector::new(covering), profile);
        prop_assert_eq!(raw.score, raw.max_score);
        prop_assert!(raw.is_reliable);

        let results = diagnose(&covering).unwrap();
        let result = results.iter().find(|r| r.disease == profile.name).unwrap();
        prop_assert!(result.is_reliable);
        prop_assert_eq!(result.reliability_percentage, 100.0);
    }

    #[test]
    fn scoring_is_deterministic(user in intensities()) {
        prop_assert_eq!(diagnose(&user).unwrap(), diagnose(&user).unwrap());
    }

    #[test]
    fn non_canonical_lengths_are_rejected(values in prop::collection::vec(0.0f64..=1.0, 0..40)) {
        let outcome = diagnose(&values);
        if values.len() == SYMPTOM_COUNT {
            prop_assert!(outcome.is_ok());
        } else {
            prop_assert!(outcome.unwrap_err().is_invalid_input_length());
        }
    }
}
