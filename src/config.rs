//! Generator configuration.
//! Optional settings file (JSON or YAML) overriding the defaults used when
//! writing listfiles.

use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// Settings that shape the generated listfiles.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Lower bound of `cmake_minimum_required`
    pub cmake_minimum: String,
    /// Policy upper bound of `cmake_minimum_required`
    pub cmake_maximum: String,
    /// `VERSION` of the `project()` call
    pub project_version: String,
    /// `DESCRIPTION` of the `project()` call
    pub description: String,
    /// Whether to require Boost and link the library against it
    pub find_boost: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            cmake_minimum: "3.20".to_string(),
            cmake_maximum: "4.0".to_string(),
            project_version: "0.1".to_string(),
            description: String::new(),
            find_boost: true,
        }
    }
}

/// Parses configuration content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor valid YAML
pub fn parse_config(content: &str) -> Result<GeneratorConfig> {
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {}", e))),
    }
}

/// Loads the configuration file, or the defaults when no file is given.
pub fn get_config<P: AsRef<Path>>(config_path: Option<P>) -> Result<GeneratorConfig> {
    let Some(config_path) = config_path else {
        debug!("No configuration file given, using defaults");
        return Ok(GeneratorConfig::default());
    };
    let config_path = config_path.as_ref();
    if !config_path.is_file() {
        return Err(Error::ConfigError(format!(
            "Invalid configuration path: {}",
            config_path.display()
        )));
    }

    debug!("Loading configuration from {}", config_path.display());
    let content = std::fs::read_to_string(config_path)?;
    parse_config(&content)
}
