use std::fs;
use std::path::Path;
use std::str::FromStr;

use dx_core::errors::{DxError, ErrorInfo};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// TOML-configurable settings for the request boundary.
///
/// The disease catalog and the reliability threshold are compiled in and
/// deliberately absent here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    /// Cross-origin headers attached to every response.
    #[serde(default)]
    pub cors: CorsConfig,
    /// Log verbosity for binaries embedding the service.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Response body formatting.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Cross-origin resource sharing settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Value of `Access-Control-Allow-Origin`.
    #[serde(default = "default_allow_origin")]
    pub allow_origin: String,
    /// Methods advertised in preflight responses.
    #[serde(default = "default_allow_methods")]
    pub allow_methods: Vec<String>,
    /// Request headers advertised in preflight responses.
    #[serde(default = "default_allow_headers")]
    pub allow_headers: Vec<String>,
}

fn default_allow_origin() -> String {
    "*".into()
}

fn default_allow_methods() -> Vec<String> {
    vec!["POST".into(), "OPTIONS".into()]
}

fn default_allow_headers() -> Vec<String> {
    vec!["Content-Type".into()]
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origin: default_allow_origin(),
            allow_methods: default_allow_methods(),
            allow_headers: default_allow_headers(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "warn".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl LoggingConfig {
    /// Parses the configured level.
    pub fn level_filter(&self) -> Result<LevelFilter, DxError> {
        LevelFilter::from_str(&self.level).map_err(|_| {
            DxError::Config(
                ErrorInfo::new("dx.config.log_level", "unknown log level")
                    .with_context("level", self.level.clone())
                    .with_hint("use one of off, error, warn, info, debug, trace"),
            )
        })
    }
}

/// Response body formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Indent JSON bodies.
    #[serde(default)]
    pub pretty: bool,
}

impl ServiceConfig {
    /// Parses a configuration from TOML text and validates it.
    pub fn from_toml_str(contents: &str) -> Result<Self, DxError> {
        let config: ServiceConfig = toml::from_str(contents).map_err(|err| {
            DxError::Config(ErrorInfo::new("dx.config.parse", err.to_string()))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration back to TOML.
    pub fn to_toml_string(&self) -> Result<String, DxError> {
        toml::to_string(self)
            .map_err(|err| DxError::Config(ErrorInfo::new("dx.config.serialize", err.to_string())))
    }

    /// Checks the values that serde defaults cannot rule out.
    pub fn validate(&self) -> Result<(), DxError> {
        if self.cors.allow_origin.trim().is_empty() {
            return Err(DxError::Config(
                ErrorInfo::new("dx.config.allow_origin", "cors.allow_origin must not be empty")
                    .with_hint("use \"*\" to accept any origin"),
            ));
        }
        if self.cors.allow_methods.is_empty() {
            return Err(DxError::Config(ErrorInfo::new(
                "dx.config.allow_methods",
                "cors.allow_methods must list at least one method",
            )));
        }
        self.logging.level_filter()?;
        Ok(())
    }
}

/// Reads, parses and validates a TOML configuration file.
pub fn load_config(path: &Path) -> Result<ServiceConfig, DxError> {
    let contents = fs::read_to_string(path).map_err(|err| {
        DxError::Config(
            ErrorInfo::new("dx.config.read", format!("failed to read config: {err}"))
                .with_context("path", path.display().to_string()),
        )
    })?;
    ServiceConfig::from_toml_str(&contents).map_err(|err| match err {
        DxError::Config(info) => {
            DxError::Config(info.with_context("path", path.display().to_string()))
        }
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = ServiceConfig::from_toml_str("").unwrap();
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.cors.allow_origin, "*");
        assert_eq!(config.logging.level_filter().unwrap(), LevelFilter::Warn);
        assert!(!config.output.pretty);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = ServiceConfig::from_toml_str(
            "[cors]\nallow_origin = \"https://frontend.example\"\n[output]\npretty = true\n",
        )
        .unwrap();
        assert_eq!(config.cors.allow_origin, "https://frontend.example");
        assert_eq!(config.cors.allow_methods, vec!["POST", "OPTIONS"]);
        assert!(config.output.pretty);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = ServiceConfig::from_toml_str("[cors]\nallow_origin = \" \"\n").unwrap_err();
        assert_eq!(err.info().code, "dx.config.allow_origin");
        let err = ServiceConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap_err();
        assert_eq!(err.info().code, "dx.config.log_level");
        let err = ServiceConfig::from_toml_str("[cors]\nallow_methods = []\n").unwrap_err();
        assert_eq!(err.info().code, "dx.config.allow_methods");
        let err = ServiceConfig::from_toml_str("[cors\n").unwrap_err();
        assert_eq!(err.info().code, "dx.config.parse");
    }
}
