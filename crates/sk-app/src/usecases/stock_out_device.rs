use std::sync::Arc;
use tracing::{info, warn};

use sk_core::{
    device::{Device, DeviceDraft, DeviceStatus, SaleDetails},
    ids::DeviceId,
    ports::{ClockPort, DeviceRepositoryPort},
};

use crate::error::InventoryError;

/// Records the sale of an in-stock device.
///
/// The stored `sellPrice` becomes the final price after discount and
/// `saleDate` is stamped from the clock. Only `StockIn` devices can be sold.
pub struct StockOutDevice {
    device_repo: Arc<dyn DeviceRepositoryPort>,
    clock: Arc<dyn ClockPort>,
}

impl StockOutDevice {
    pub fn new(device_repo: Arc<dyn DeviceRepositoryPort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { device_repo, clock }
    }

    #[tracing::instrument(
        name = "usecase.stock_out_device.execute",
        skip(self, sale),
        fields(device_id = %id, payment_mode = %sale.payment_mode)
    )]
    pub async fn execute(&self, id: &DeviceId, sale: SaleDetails) -> Result<Device, InventoryError> {
        let Some(mut device) = self.device_repo.find_by_id(id).await? else {
            return Err(InventoryError::DeviceNotFound(id.to_string()));
        };

        match device.status() {
            Some(DeviceStatus::StockIn) => {}
            Some(DeviceStatus::StockOut) => {
                warn!("device already sold");
                return Err(InventoryError::AlreadySold(device.id));
            }
            None => {
                warn!("device has no stock status");
                return Err(InventoryError::NotInStock(device.id));
            }
        }

        let sale_date = self.clock.now().to_rfc3339();
        let final_price = sale.final_price();
        sale.into_patch(sale_date).apply_to(&mut device.details);

        let saved = self.device_repo.save(DeviceDraft::from(device)).await?;
        info!(final_price, "device stocked out");
        Ok(saved)
    }
}
