use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use commands::{
    catalog::{self, CatalogArgs},
    diagnose::{self, DiagnoseArgs},
    symptoms,
    version::{self, VersionArgs},
};
use dx_service::{load_config, LoggingConfig, ServiceConfig};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "dx", about = "Symptom-profile diagnosis scorer")]
struct Cli {
    /// TOML configuration for CORS, logging and output settings.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log level override (off, error, warn, info, debug, trace).
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a JSON symptom object and print the response envelope.
    Diagnose(DiagnoseArgs),
    /// Print the compiled-in disease catalog.
    Catalog(CatalogArgs),
    /// Print the canonical symptom order.
    Symptoms,
    /// Print version information.
    Version(VersionArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    init_logging(cli.log_level.as_deref(), cli.config.is_some(), &config)?;

    match cli.command {
        Command::Diagnose(args) => diagnose::run(&args, config),
        Command::Catalog(args) => catalog::run(&args),
        Command::Symptoms => symptoms::run(),
        Command::Version(args) => version::run(&args),
    }
}

/// `--log-level` wins, then a level from an explicit config file, then
/// `RUST_LOG`, then `warn`.
fn init_logging(
    cli_level: Option<&str>,
    from_file: bool,
    config: &ServiceConfig,
) -> Result<(), Box<dyn Error>> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = cli_level {
        let level = LoggingConfig {
            level: level.to_string(),
        };
        builder.filter_level(level.level_filter()?);
    } else if from_file {
        builder.filter_level(config.logging.level_filter()?);
    }
    // A logger may already be installed when embedded in tests.
    let _ = builder.try_init();
    Ok(())
}
