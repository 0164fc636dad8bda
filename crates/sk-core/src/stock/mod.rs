//! Combined stock listing: devices and inventory items as uniform lines.

use serde::{Deserialize, Serialize};

use crate::device::{Device, DeviceStatus};
use crate::inventory::InventoryItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    InStock,
    OutOfStock,
    LowStock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLineFilter {
    #[default]
    All,
    OutOfStock,
    LowStock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLineSource {
    Device,
    Inventory,
}

/// One row of the stock screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockLine {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub stock: u32,
    pub level: StockLevel,
    pub source: StockLineSource,
}

impl StockLine {
    pub fn from_device(device: &Device) -> Self {
        let (stock, level) = match device.status() {
            Some(DeviceStatus::StockIn) => (1, StockLevel::InStock),
            Some(DeviceStatus::StockOut) => (0, StockLevel::OutOfStock),
            None => (0, StockLevel::LowStock),
        };
        Self {
            id: device.id.to_string(),
            name: device.display_name().to_string(),
            sku: device
                .details
                .sku
                .clone()
                .unwrap_or_else(|| format!("DEV-{}", device.id)),
            stock,
            level,
            source: StockLineSource::Device,
        }
    }

    pub fn from_item(item: &InventoryItem) -> Self {
        let stock = item.details.quantity.unwrap_or(0);
        Self {
            id: item.id.to_string(),
            name: item.details.name.clone(),
            sku: item.details.sku.clone().unwrap_or_default(),
            stock,
            level: if stock == 0 {
                StockLevel::OutOfStock
            } else {
                StockLevel::InStock
            },
            source: StockLineSource::Inventory,
        }
    }
}

/// Devices first, then inventory items, each in storage order.
pub fn stock_lines(
    devices: &[Device],
    inventory: &[InventoryItem],
    filter: StockLineFilter,
) -> Vec<StockLine> {
    devices
        .iter()
        .map(StockLine::from_device)
        .chain(inventory.iter().map(StockLine::from_item))
        .filter(|line| match filter {
            StockLineFilter::All => true,
            StockLineFilter::OutOfStock => line.level == StockLevel::OutOfStock,
            StockLineFilter::LowStock => line.level == StockLevel::LowStock,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::DeviceDetails;
    use crate::ids::{DeviceId, ItemId};
    use crate::inventory::InventoryItemDetails;
    use chrono::Utc;

    fn device(id: &str, status: Option<DeviceStatus>) -> Device {
        let now = Utc::now();
        Device {
            id: DeviceId::from(id),
            details: DeviceDetails {
                status,
                ..Default::default()
            },
            created_at: now,
            updated_at: now,
        }
    }

    fn item(name: &str, quantity: Option<u32>) -> InventoryItem {
        let now = Utc::now();
        InventoryItem {
            id: ItemId::from(name),
            details: InventoryItemDetails {
                name: name.into(),
                quantity,
                ..Default::default()
            },
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn device_lines_fall_back_to_synthetic_sku() {
        let line = StockLine::from_device(&device("42", Some(DeviceStatus::StockIn)));
        assert_eq!(line.sku, "DEV-42");
        assert_eq!(line.name, "Unknown Device");
        assert_eq!(line.stock, 1);
        assert_eq!(line.level, StockLevel::InStock);
    }

    #[test]
    fn filters_by_level() {
        let devices = vec![
            device("a", Some(DeviceStatus::StockIn)),
            device("b", Some(DeviceStatus::StockOut)),
            device("c", None),
        ];
        let inventory = vec![item("cable", Some(0)), item("case", Some(4))];

        let all = stock_lines(&devices, &inventory, StockLineFilter::All);
        assert_eq!(all.len(), 5);
        assert_eq!(all[3].source, StockLineSource::Inventory);

        let out: Vec<_> = stock_lines(&devices, &inventory, StockLineFilter::OutOfStock)
            .into_iter()
            .map(|line| line.id)
            .collect();
        assert_eq!(out, vec!["b".to_string(), "cable".to_string()]);

        let low = stock_lines(&devices, &inventory, StockLineFilter::LowStock);
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].id, "c");
    }
}
