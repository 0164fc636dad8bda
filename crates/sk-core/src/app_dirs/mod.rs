use std::path::PathBuf;

/// Platform directories resolved once at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub app_data_root: PathBuf,
}
