use std::sync::Arc;
use tracing::Instrument;

use sk_core::{
    device::Device,
    inventory::InventoryItem,
    ports::{DeviceRepositoryPort, InventoryRepositoryPort},
    statistics::StatisticsSnapshot,
};

use crate::error::InventoryError;

/// Both collections plus the statistics derived from them, read together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryData {
    pub devices: Vec<Device>,
    pub inventory: Vec<InventoryItem>,
    pub statistics: StatisticsSnapshot,
}

pub struct LoadInventoryData {
    device_repo: Arc<dyn DeviceRepositoryPort>,
    inventory_repo: Arc<dyn InventoryRepositoryPort>,
}

impl LoadInventoryData {
    pub fn new(
        device_repo: Arc<dyn DeviceRepositoryPort>,
        inventory_repo: Arc<dyn InventoryRepositoryPort>,
    ) -> Self {
        Self {
            device_repo,
            inventory_repo,
        }
    }

    pub async fn execute(&self) -> Result<InventoryData, InventoryError> {
        let span = tracing::debug_span!("usecase.load_inventory_data.execute");

        async move {
            let devices = self.device_repo.list_all().await?;
            let inventory = self.inventory_repo.list_all().await?;
            let statistics = StatisticsSnapshot::compute(&devices, &inventory);

            Ok(InventoryData {
                devices,
                inventory,
                statistics,
            })
        }
        .instrument(span)
        .await
    }
}
