use std::error::Error;

use clap::Args;
use dx_core::{catalog, SYMPTOM_NAMES};
use dx_score::{catalog_hash, pairwise_sum, round2, to_canonical_json_pretty};
use serde::Serialize;

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Print only the catalog fingerprint.
    #[arg(long)]
    pub hash_only: bool,
}

#[derive(Debug, Serialize)]
struct ProfileView {
    name: &'static str,
    symptoms: Vec<f64>,
    max_score: f64,
}

#[derive(Debug, Serialize)]
struct CatalogView {
    catalog_hash: String,
    symptom_order: Vec<&'static str>,
    profiles: Vec<ProfileView>,
}

pub fn run(args: &CatalogArgs) -> Result<(), Box<dyn Error>> {
    let hash = catalog_hash(catalog());
    if args.hash_only {
        println!("{hash}");
        return Ok(());
    }
    let view = CatalogView {
        catalog_hash: hash,
        symptom_order: SYMPTOM_NAMES.to_vec(),
        profiles: catalog()
            .iter()
            .map(|profile| ProfileView {
                name: profile.name,
                symptoms: profile.symptoms.as_slice().to_vec(),
                max_score: round2(pairwise_sum(profile.symptoms.values())),
            })
            .collect(),
    };
    let json = to_canonical_json_pretty(&view)?;
    println!("{}", String::from_utf8(json)?);
    Ok(())
}
