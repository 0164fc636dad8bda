use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::device::{Device, DeviceDetails};
use super::status::DeviceStatus;
use crate::ids::DeviceId;

/// Input to a device save: everything but the system-managed timestamps.
///
/// A draft without an id is a new device; the repository generates one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DeviceId>,
    #[serde(flatten)]
    pub details: DeviceDetails,
}

impl DeviceDraft {
    pub fn new(details: DeviceDetails) -> Self {
        Self { id: None, details }
    }

    pub fn with_id(id: impl Into<DeviceId>, details: DeviceDetails) -> Self {
        Self {
            id: Some(id.into()),
            details,
        }
    }

    /// Registration draft: id defaults to the IMEI, status to `StockIn`.
    pub fn stock_in(mut details: DeviceDetails) -> Self {
        if details.status.is_none() {
            details.status = Some(DeviceStatus::StockIn);
        }
        let id = details
            .imei
            .as_deref()
            .map(str::trim)
            .filter(|imei| !imei.is_empty())
            .map(DeviceId::from);
        Self { id, details }
    }
}

impl From<Device> for DeviceDraft {
    fn from(device: Device) -> Self {
        Self {
            id: Some(device.id),
            details: device.details,
        }
    }
}

/// Partial update of a device. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevicePatch {
    pub imei: Option<String>,
    pub imei2: Option<String>,
    pub serial_number: Option<String>,
    pub sku: Option<String>,
    pub model_name: Option<String>,
    pub ram: Option<String>,
    pub storage: Option<String>,
    pub color: Option<String>,
    pub purchase_price: Option<String>,
    pub sell_price: Option<String>,
    #[serde(rename = "deviceStatus")]
    pub status: Option<DeviceStatus>,
    #[serde(rename = "box")]
    pub has_box: Option<bool>,
    pub charger: Option<bool>,
    pub bill: Option<bool>,
    pub customer_name: Option<String>,
    pub customer_contact: Option<String>,
    pub customer_email: Option<String>,
    pub customer_address: Option<String>,
    pub customer_gst: Option<String>,
    pub document_id: Option<String>,
    pub sale_date: Option<String>,
    pub payment_mode: Option<String>,
    #[serde(default)]
    pub extra: BTreeMap<String, Value>,
}

impl DevicePatch {
    pub fn is_empty(&self) -> bool {
        *self == DevicePatch::default()
    }

    /// Shallow-merges the patch over `details`, last writer wins per field.
    ///
    /// `extra` entries named like a typed field are discarded.
    pub fn apply_to(self, details: &mut DeviceDetails) {
        fn set<T>(slot: &mut Option<T>, value: Option<T>) {
            if let Some(value) = value {
                *slot = Some(value);
            }
        }

        set(&mut details.imei, self.imei);
        set(&mut details.imei2, self.imei2);
        set(&mut details.serial_number, self.serial_number);
        set(&mut details.sku, self.sku);
        set(&mut details.model_name, self.model_name);
        set(&mut details.ram, self.ram);
        set(&mut details.storage, self.storage);
        set(&mut details.color, self.color);
        set(&mut details.purchase_price, self.purchase_price);
        set(&mut details.sell_price, self.sell_price);
        set(&mut details.status, self.status);
        set(&mut details.customer.name, self.customer_name);
        set(&mut details.customer.contact, self.customer_contact);
        set(&mut details.customer.email, self.customer_email);
        set(&mut details.customer.address, self.customer_address);
        set(&mut details.customer.gst, self.customer_gst);
        set(&mut details.customer.document_id, self.document_id);
        set(&mut details.sale_date, self.sale_date);
        set(&mut details.payment_mode, self.payment_mode);

        if let Some(has_box) = self.has_box {
            details.accessories.has_box = has_box;
        }
        if let Some(charger) = self.charger {
            details.accessories.charger = charger;
        }
        if let Some(bill) = self.bill {
            details.accessories.bill = bill;
        }

        details.extra.extend(self.extra);
        details.drop_shadowing_extra();
    }
}
