use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::status::DeviceStatus;
use crate::ids::DeviceId;

/// Keys a stored device owns outright. An `extra` entry under one of these
/// would be written after the typed field and win when the record is read
/// back, so such entries never reach storage.
pub const DEVICE_WIRE_KEYS: &[&str] = &[
    "id",
    "createdAt",
    "updatedAt",
    "imei",
    "imei2",
    "serialNumber",
    "sku",
    "modelName",
    "ram",
    "storage",
    "color",
    "purchasePrice",
    "sellPrice",
    "deviceStatus",
    "status",
    "lowStock",
    "box",
    "charger",
    "bill",
    "customerName",
    "customerContact",
    "customerEmail",
    "customerAddress",
    "customerGst",
    "customerGST",
    "documentId",
    "saleDate",
    "paymentMode",
];

/// Removes the entries of `extra` whose key is in `reserved`, returning the
/// removed keys.
pub(crate) fn drop_reserved_keys(
    extra: &mut BTreeMap<String, Value>,
    reserved: &[&str],
) -> Vec<String> {
    let dropped: Vec<String> = extra
        .keys()
        .filter(|key| reserved.contains(&key.as_str()))
        .cloned()
        .collect();
    for key in &dropped {
        extra.remove(key);
    }
    dropped
}

/// Accessories shipped with the unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accessories {
    #[serde(rename = "box", default)]
    pub has_box: bool,
    #[serde(default)]
    pub charger: bool,
    #[serde(default)]
    pub bill: bool,
}

/// Buyer (or seller, at registration) contact details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    #[serde(rename = "customerName", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "customerContact", default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(rename = "customerEmail", default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "customerAddress", default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(
        rename = "customerGst",
        alias = "customerGST",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub gst: Option<String>,
    #[serde(rename = "documentId", default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
}

/// Every caller-owned attribute of a device.
///
/// Identity and timestamps live on [`Device`]; this struct is what registration
/// forms and updates actually fill in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imei: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imei2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Decimal string as typed by staff.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<String>,
    /// Decimal string as typed by staff.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sell_price: Option<String>,
    #[serde(rename = "deviceStatus", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DeviceStatus>,
    /// Only set on records carried over from the `"Low Stock"` label era.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub low_stock: bool,
    #[serde(flatten)]
    pub accessories: Accessories,
    #[serde(flatten)]
    pub customer: CustomerDetails,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_mode: Option<String>,
    /// Keys this schema does not know about, preserved across rewrites.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl DeviceDetails {
    /// Strips `extra` entries that would shadow a typed field on reload.
    pub fn drop_shadowing_extra(&mut self) -> Vec<String> {
        drop_reserved_keys(&mut self.extra, DEVICE_WIRE_KEYS)
    }

    /// Fields consulted by free-text search, in no particular priority.
    fn searchable_fields(&self) -> [Option<&str>; 4] {
        [
            self.imei.as_deref(),
            self.model_name.as_deref(),
            self.serial_number.as_deref(),
            self.sku.as_deref(),
        ]
    }
}

/// One physical unit of stock, as persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: DeviceId,
    #[serde(flatten)]
    pub details: DeviceDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Device {
    pub fn id(&self) -> &DeviceId {
        &self.id
    }

    pub fn status(&self) -> Option<DeviceStatus> {
        self.details.status
    }

    pub fn is_in_stock(&self) -> bool {
        self.details.status == Some(DeviceStatus::StockIn)
    }

    /// Case-insensitive substring match on IMEI, model, serial number and SKU.
    ///
    /// `needle` must already be lowercased; an empty needle matches everything.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.details
            .searchable_fields()
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(needle))
    }

    /// Display name used by list views.
    pub fn display_name(&self) -> &str {
        self.details
            .model_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or("Unknown Device")
    }
}
