use std::sync::Arc;

use sk_core::{
    ports::{DeviceRepositoryPort, InventoryRepositoryPort},
    statistics::StatisticsSnapshot,
};

use super::LoadInventoryData;
use crate::error::InventoryError;

/// Standalone statistics: re-reads both collections and recomputes from scratch.
pub struct ComputeStatistics {
    loader: LoadInventoryData,
}

impl ComputeStatistics {
    pub fn new(
        device_repo: Arc<dyn DeviceRepositoryPort>,
        inventory_repo: Arc<dyn InventoryRepositoryPort>,
    ) -> Self {
        Self {
            loader: LoadInventoryData::new(device_repo, inventory_repo),
        }
    }

    #[tracing::instrument(name = "usecase.compute_statistics.execute", skip(self))]
    pub async fn execute(&self) -> Result<StatisticsSnapshot, InventoryError> {
        Ok(self.loader.execute().await?.statistics)
    }
}
