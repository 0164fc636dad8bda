//! Generic inventory line items, tracked beside devices.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::device::device::drop_reserved_keys;
use crate::ids::ItemId;

/// Keys a stored inventory item owns outright; see [`crate::device::DEVICE_WIRE_KEYS`].
pub const INVENTORY_WIRE_KEYS: &[&str] = &[
    "id",
    "createdAt",
    "updatedAt",
    "name",
    "sku",
    "quantity",
    "unitPrice",
    "notes",
];

/// A named stock line (accessories, spare parts...). No lifecycle beyond
/// create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: ItemId,
    #[serde(flatten)]
    pub details: InventoryItemDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    /// Decimal string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl InventoryItemDetails {
    /// Strips `extra` entries that would shadow a typed field on reload.
    pub fn drop_shadowing_extra(&mut self) -> Vec<String> {
        drop_reserved_keys(&mut self.extra, INVENTORY_WIRE_KEYS)
    }
}

/// Input to an inventory save. Without an id the repository generates one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemId>,
    #[serde(flatten)]
    pub details: InventoryItemDetails,
}

impl InventoryItemDraft {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            details: InventoryItemDetails {
                name: name.into(),
                ..Default::default()
            },
        }
    }
}

impl From<InventoryItem> for InventoryItemDraft {
    fn from(item: InventoryItem) -> Self {
        Self {
            id: Some(item.id),
            details: item.details,
        }
    }
}
