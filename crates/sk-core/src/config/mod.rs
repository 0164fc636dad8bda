//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - Define configuration data structures
//! - Provide TOML → DTO mapping
//!
//! ## Prohibited
//!
//! - No business logic or policies
//! - No validation logic
//! - No default value calculation beyond "empty"
//!
//! > **This module contains data only, no policy, no validation.**

use std::path::{Path, PathBuf};

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding one JSON file per storage key (no existence check)
    pub data_dir: PathBuf,

    /// Keep everything in memory; nothing survives the process
    pub in_memory: bool,

    /// Directory for rolling log files
    pub logs_dir: PathBuf,

    /// Whether the file log layer is installed at all
    pub file_logging: bool,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// **Prohibited**: This method must NOT contain any validation
    /// or default value logic. Empty strings are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let section = |name: &str, key: &str| toml_value.get(name).and_then(|s| s.get(key));

        Ok(Self {
            data_dir: PathBuf::from(
                section("storage", "data_dir")
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            in_memory: section("storage", "in_memory")
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
            logs_dir: PathBuf::from(
                section("logging", "logs_dir")
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            file_logging: section("logging", "file_logging")
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            data_dir: PathBuf::new(),
            in_memory: false,
            logs_dir: PathBuf::new(),
            file_logging: false,
        }
    }

    /// Create AppConfig with paths derived from a base directory.
    ///
    /// The base directory is computed by the caller (platform data dir).
    pub fn with_system_defaults(base_dir: &Path) -> Self {
        Self {
            data_dir: base_dir.join("data"),
            in_memory: false,
            logs_dir: base_dir.join("logs"),
            file_logging: true,
        }
    }
}
