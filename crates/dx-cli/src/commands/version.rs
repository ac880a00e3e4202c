use std::error::Error;

use clap::Args;
use dx_core::{catalog, CATALOG_LEN, RESPONSE_SCHEMA, SYMPTOM_COUNT};
use dx_score::{catalog_hash, to_canonical_json_bytes, RELIABILITY_THRESHOLD};
use serde::Serialize;

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Emit extended metadata including the catalog fingerprint.
    #[arg(long)]
    pub long: bool,
}

#[derive(Debug, Serialize)]
struct VersionInfo {
    version: String,
    response_schema: String,
    catalog_hash: String,
    diseases: usize,
    symptoms: usize,
    reliability_threshold: f64,
}

pub fn run(args: &VersionArgs) -> Result<(), Box<dyn Error>> {
    if !args.long {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let info = VersionInfo {
        version: env!("CARGO_PKG_VERSION").into(),
        response_schema: RESPONSE_SCHEMA.to_string(),
        catalog_hash: catalog_hash(catalog()),
        diseases: CATALOG_LEN,
        symptoms: SYMPTOM_COUNT,
        reliability_threshold: RELIABILITY_THRESHOLD,
    };
    let json = to_canonical_json_bytes(&info)?;
    println!("{}", String::from_utf8(json)?);
    Ok(())
}
