use serde::{Deserialize, Serialize};

use super::price::device_value;
use crate::device::{Device, DeviceStatus};
use crate::inventory::InventoryItem;

/// Derived counters shown on the dashboard. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSnapshot {
    pub total_devices: usize,
    pub in_stock: usize,
    pub out_of_stock: usize,
    pub low_stock: usize,
    pub total_value: f64,
    pub total_inventory: usize,
}

impl StatisticsSnapshot {
    /// Full recomputation over both collections.
    pub fn compute(devices: &[Device], inventory: &[InventoryItem]) -> Self {
        let mut stats = StatisticsSnapshot {
            total_devices: devices.len(),
            total_inventory: inventory.len(),
            ..Default::default()
        };

        for device in devices {
            match device.status() {
                Some(DeviceStatus::StockIn) => stats.in_stock += 1,
                Some(DeviceStatus::StockOut) => stats.out_of_stock += 1,
                None => {}
            }
            if device.details.low_stock {
                stats.low_stock += 1;
            }
            stats.total_value += device_value(device);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            total_devices = stats.total_devices,
            in_stock = stats.in_stock,
            out_of_stock = stats.out_of_stock,
            total_value = stats.total_value,
            "statistics recomputed"
        );

        stats
    }
}
