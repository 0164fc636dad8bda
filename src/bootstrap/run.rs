//! Start-up sequence shared by the binary and integration tests.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::info;

use sk_app::InventoryState;
use sk_core::config::AppConfig;
use sk_core::ports::AppDirsPort;
use sk_infra::DirsAppDirsAdapter;

use super::{build_state, load_config};

/// Environment variable pointing at an explicit config file.
pub const CONFIG_ENV_VAR: &str = "STOCKKEEPER_CONFIG";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Effective configuration: the file's facts, with empty paths filled from
/// the platform defaults rooted at `app_data_root`.
///
/// `explicit` must exist; the default `<app_data_root>/config.toml` is
/// optional.
pub fn resolve_config(app_data_root: &Path, explicit: Option<PathBuf>) -> anyhow::Result<AppConfig> {
    let defaults = AppConfig::with_system_defaults(app_data_root);

    let loaded = match explicit {
        Some(path) => Some(load_config(&path)?),
        None => {
            let path = app_data_root.join(CONFIG_FILE_NAME);
            if path.is_file() {
                Some(load_config(&path)?)
            } else {
                None
            }
        }
    };

    let Some(mut config) = loaded else {
        return Ok(defaults);
    };
    if config.data_dir.as_os_str().is_empty() {
        config.data_dir = defaults.data_dir;
    }
    if config.logs_dir.as_os_str().is_empty() {
        config.logs_dir = defaults.logs_dir;
    }
    Ok(config)
}

/// Resolves directories and config, wires the state and loads it.
///
/// Tracing is installed by the caller once the config is known.
pub async fn start(config: &AppConfig) -> anyhow::Result<InventoryState> {
    let state = build_state(config)?;
    state
        .initialize()
        .await
        .context("Failed to load inventory data")?;

    let stats = state.statistics();
    info!(
        devices = stats.total_devices,
        in_stock = stats.in_stock,
        inventory = stats.total_inventory,
        "inventory loaded"
    );
    Ok(state)
}

/// Config resolved against the platform data directory and `STOCKKEEPER_CONFIG`.
pub fn platform_config() -> anyhow::Result<AppConfig> {
    let dirs = DirsAppDirsAdapter::new()
        .get_app_dirs()
        .context("Failed to resolve app data directory")?;
    let explicit = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
    resolve_config(&dirs.app_data_root, explicit)
}
