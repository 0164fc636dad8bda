use anyhow::{Context, Result};
use std::path::PathBuf;

pub(crate) const APP_DIR_NAME: &str = "StockKeeper";

/// Application data root for StockKeeper.
///
/// - macOS: ~/Library/Application Support/StockKeeper
/// - Windows: %APPDATA%\StockKeeper
/// - Linux: $XDG_DATA_HOME/StockKeeper or ~/.local/share/StockKeeper
///
/// The directory is not created here; callers decide when to create it.
pub fn app_data_dir() -> Result<PathBuf> {
    let base_dir =
        platform_data_dir().context("Failed to get platform-specific data directory")?;

    Ok(base_dir.join(APP_DIR_NAME))
}

fn platform_data_dir() -> Result<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        if let Some(xdg_data_home) = std::env::var_os("XDG_DATA_HOME") {
            return Ok(PathBuf::from(xdg_data_home));
        }
    }

    dirs::data_dir().ok_or_else(|| anyhow::anyhow!("Unable to resolve the platform data directory"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_data_dir_ends_with_app_name() {
        let path = app_data_dir().expect("data dir should resolve");
        assert!(path.ends_with(APP_DIR_NAME));
    }
}
