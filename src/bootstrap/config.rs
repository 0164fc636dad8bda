//! # Configuration Loader
//!
//! Reads a TOML file and maps it onto the [`AppConfig`] DTO.
//!
//! No validation and no defaults happen here: empty strings and missing
//! sections are accepted as facts. Filling gaps is the caller's job.

use anyhow::Context;
use std::path::Path;

use sk_core::config::AppConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Fails when the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}
