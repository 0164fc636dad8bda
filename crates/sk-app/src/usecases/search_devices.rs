use std::sync::Arc;
use tracing::debug;

use sk_core::{
    device::{Device, StatusFilter},
    ports::DeviceRepositoryPort,
};

use crate::error::InventoryError;

/// Free-text device search with an optional stock-status filter.
pub struct SearchDevices {
    device_repo: Arc<dyn DeviceRepositoryPort>,
}

impl SearchDevices {
    pub fn new(device_repo: Arc<dyn DeviceRepositoryPort>) -> Self {
        Self { device_repo }
    }

    #[tracing::instrument(name = "usecase.search_devices.execute", skip(self))]
    pub async fn execute(
        &self,
        query: &str,
        filter: StatusFilter,
    ) -> Result<Vec<Device>, InventoryError> {
        let mut devices = self.device_repo.search(query).await?;
        devices.retain(|device| filter.matches(device.status()));
        debug!(hits = devices.len(), "search finished");
        Ok(devices)
    }
}
