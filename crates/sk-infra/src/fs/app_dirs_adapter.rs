use sk_core::{
    app_dirs::AppDirs,
    ports::{AppDirsError, AppDirsPort},
};
use tracing::warn;

use super::app_data_dir;

/// Resolves [`AppDirs`] from the platform data directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct DirsAppDirsAdapter;

impl DirsAppDirsAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl AppDirsPort for DirsAppDirsAdapter {
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        let app_data_root = app_data_dir().map_err(|e| {
            warn!(error = %e, "platform data directory unavailable");
            AppDirsError::DataDirUnavailable
        })?;
        Ok(AppDirs { app_data_root })
    }
}
