use thiserror::Error;

use sk_core::{
    ids::DeviceId,
    ports::{RepositoryError, StoreError},
};

/// Failures surfaced by use cases and the state façade.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("device not found: {0}")]
    DeviceNotFound(String),

    #[error("device {0} has already been sold")]
    AlreadySold(DeviceId),

    #[error("device {0} is not in stock")]
    NotInStock(DeviceId),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl From<StoreError> for InventoryError {
    fn from(err: StoreError) -> Self {
        InventoryError::Repository(RepositoryError::Store(err))
    }
}

impl InventoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, InventoryError::DeviceNotFound(_))
    }
}
