use std::sync::Arc;
use tracing::info;

use sk_core::{ids::DeviceId, ports::DeviceRepositoryPort};

use crate::error::InventoryError;

/// Permanently removes a device. Unknown ids succeed.
pub struct DeleteDevice {
    device_repo: Arc<dyn DeviceRepositoryPort>,
}

impl DeleteDevice {
    pub fn new(device_repo: Arc<dyn DeviceRepositoryPort>) -> Self {
        Self { device_repo }
    }

    #[tracing::instrument(name = "usecase.delete_device.execute", skip(self), fields(device_id = %id))]
    pub async fn execute(&self, id: &DeviceId) -> Result<(), InventoryError> {
        self.device_repo.delete(id).await?;
        info!("device deleted");
        Ok(())
    }
}
