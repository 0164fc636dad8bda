use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed for key `{key}`: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid store key: {0:?}")]
    InvalidKey(String),

    #[error("store backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The payload exists but cannot be decoded. Distinct from "never written".
    #[error("stored collection `{key}` is corrupt: {reason}")]
    Corrupt { key: String, reason: String },

    #[error("failed to serialize `{key}`: {reason}")]
    Serialize { key: String, reason: String },
}

impl RepositoryError {
    pub fn is_corrupt(&self) -> bool {
        matches!(self, RepositoryError::Corrupt { .. })
    }
}

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("platform data directory is unavailable")]
    DataDirUnavailable,
}
