use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::Args;
use dx_service::{DiagnosisService, Request, ServiceConfig, DIAGNOSE_PATH};
use serde_json::{Map, Number, Value};

#[derive(Args, Debug)]
pub struct DiagnoseArgs {
    /// JSON file holding a symptom-name to intensity object; `-` reads stdin.
    #[arg(long = "in", conflicts_with = "set")]
    pub input: Option<PathBuf>,
    /// Inline intensity as `NAME=VALUE`; may be repeated.
    #[arg(long = "set", value_name = "NAME=VALUE")]
    pub set: Vec<String>,
}

pub fn run(args: &DiagnoseArgs, config: ServiceConfig) -> Result<(), Box<dyn Error>> {
    let body = request_body(args)?;
    log::debug!("read {} byte request body", body.len());
    let service = DiagnosisService::new(config);
    let response = service.handle(&Request::post(DIAGNOSE_PATH, body));

    let mut stdout = io::stdout().lock();
    stdout.write_all(&response.body)?;
    writeln!(stdout)?;

    if !response.status.is_success() {
        return Err(format!(
            "diagnosis failed with status {} {}",
            response.status.code(),
            response.status.reason()
        )
        .into());
    }
    Ok(())
}

fn request_body(args: &DiagnoseArgs) -> Result<Vec<u8>, Box<dyn Error>> {
    if !args.set.is_empty() {
        return inline_body(&args.set);
    }
    match &args.input {
        Some(path) if path.as_os_str() != "-" => Ok(fs::read(path)?),
        _ => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn inline_body(pairs: &[String]) -> Result<Vec<u8>, Box<dyn Error>> {
    let mut object = Map::new();
    for pair in pairs {
        let (name, value) = pair
            .split_once('=')
            .ok_or_else(|| format!("expected NAME=VALUE, got {pair:?}"))?;
        let value: f64 = value
            .trim()
            .parse()
            .map_err(|err| format!("invalid intensity for {name:?}: {err}"))?;
        let number =
            Number::from_f64(value).ok_or_else(|| format!("intensity for {name:?} is not finite"))?;
        object.insert(name.trim().to_string(), Value::Number(number));
    }
    Ok(serde_json::to_vec(&Value::Object(object))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_pairs_become_a_symptom_object() {
        let body = inline_body(&["Fiebre=0.8".into(), " Tos seca = 1".into()]).unwrap();
        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["Fiebre"], 0.8);
        assert_eq!(value["Tos seca"], 1.0);
    }

    #[test]
    fn malformed_pairs_are_rejected() {
        assert!(inline_body(&["Fiebre".into()]).is_err());
        assert!(inline_body(&["Fiebre=alta".into()]).is_err());
        assert!(inline_body(&["Fiebre=NaN".into()]).is_err());
    }
}
