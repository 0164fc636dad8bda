use std::sync::Arc;
use tracing::info;

use sk_core::{
    device::{Device, DeviceDraft},
    ports::DeviceRepositoryPort,
};

use crate::error::InventoryError;

/// Stores a new device, or replaces one that already carries the draft's id.
pub struct RegisterDevice {
    device_repo: Arc<dyn DeviceRepositoryPort>,
}

impl RegisterDevice {
    pub fn new(device_repo: Arc<dyn DeviceRepositoryPort>) -> Self {
        Self { device_repo }
    }

    #[tracing::instrument(name = "usecase.register_device.execute", skip_all)]
    pub async fn execute(&self, draft: DeviceDraft) -> Result<Device, InventoryError> {
        let device = self.device_repo.save(draft).await?;
        info!(device_id = %device.id, model = device.display_name(), "device registered");
        Ok(device)
    }
}
