use std::sync::Arc;
use tracing::debug;

use sk_core::{
    device::{Device, DeviceStatus},
    ids::DeviceId,
    ports::DeviceRepositoryPort,
};

use crate::error::InventoryError;

pub struct GetDeviceById {
    device_repo: Arc<dyn DeviceRepositoryPort>,
}

impl GetDeviceById {
    pub fn new(device_repo: Arc<dyn DeviceRepositoryPort>) -> Self {
        Self { device_repo }
    }

    #[tracing::instrument(name = "usecase.get_device_by_id.execute", skip(self), fields(device_id = %id))]
    pub async fn execute(&self, id: &DeviceId) -> Result<Option<Device>, InventoryError> {
        Ok(self.device_repo.find_by_id(id).await?)
    }
}

/// Looks up a scanned IMEI at the counter and checks the unit can be sold.
pub struct FindDeviceForStockOut {
    device_repo: Arc<dyn DeviceRepositoryPort>,
}

impl FindDeviceForStockOut {
    pub fn new(device_repo: Arc<dyn DeviceRepositoryPort>) -> Self {
        Self { device_repo }
    }

    #[tracing::instrument(name = "usecase.find_device_for_stock_out.execute", skip(self))]
    pub async fn execute(&self, imei: &str) -> Result<Device, InventoryError> {
        let imei = imei.trim();
        let Some(device) = self.device_repo.find_by_imei(imei).await? else {
            debug!("no device with this IMEI");
            return Err(InventoryError::DeviceNotFound(imei.to_string()));
        };

        if device.status() == Some(DeviceStatus::StockOut) {
            return Err(InventoryError::AlreadySold(device.id));
        }
        Ok(device)
    }
}
