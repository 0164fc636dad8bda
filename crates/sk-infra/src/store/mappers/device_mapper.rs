use serde_json::{Map, Value};
use tracing::warn;

use sk_core::device::{Device, DeviceStatus};

use super::{
    drop_nulls, into_object, normalize_id, normalize_timestamps, stringify_fields, MappingError,
};

/// Label-era status field, replaced by `deviceStatus` + `lowStock`.
const LEGACY_STATUS: &str = "status";
const LOW_STOCK_LABEL: &str = "Low Stock";
/// Where labels with no canonical meaning ("Under Repair"...) are kept.
const PRESERVED_LEGACY_STATUS: &str = "legacyStatus";
/// Where an unrecognised `deviceStatus` value is kept.
const PRESERVED_DEVICE_STATUS: &str = "legacyDeviceStatus";

/// Spelling of the GST key written by older forms.
const LEGACY_GST: &str = "customerGST";

const TEXT_FIELDS: &[&str] = &[
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
    "customerContact",
];

/// Decodes one stored device, migrating legacy status labels on the way.
pub fn device_from_value(value: Value) -> Result<Device, MappingError> {
    let mut map = into_object(value)?;
    drop_nulls(&mut map);
    normalize_id(&mut map)?;
    normalize_timestamps(&mut map);
    stringify_fields(&mut map, TEXT_FIELDS);
    normalize_status(&mut map);
    if let Some(gst) = map.remove(LEGACY_GST) {
        map.entry("customerGst").or_insert(gst);
    }

    Ok(serde_json::from_value(Value::Object(map))?)
}

fn normalize_status(map: &mut Map<String, Value>) {
    let legacy_label = match map.remove(LEGACY_STATUS) {
        Some(Value::String(label)) => Some(label),
        Some(other) => Some(other.to_string()),
        None => None,
    };

    let parsed = match map.get("deviceStatus") {
        Some(Value::String(raw)) => Some(raw.parse::<DeviceStatus>().ok()),
        Some(_) => Some(None),
        None => None,
    };

    let canonical = match parsed {
        Some(Some(status)) => Some(status),
        Some(None) => {
            if let Some(raw) = map.remove("deviceStatus") {
                warn!(value = %raw, "unrecognised deviceStatus preserved and ignored");
                map.insert(PRESERVED_DEVICE_STATUS.to_string(), raw);
            }
            None
        }
        None => None,
    };

    let Some(label) = legacy_label else {
        return;
    };

    if label == LOW_STOCK_LABEL {
        map.insert("lowStock".to_string(), Value::Bool(true));
    }

    match DeviceStatus::from_legacy_label(&label) {
        Some(status) if canonical.is_none() => {
            map.insert(
                "deviceStatus".to_string(),
                Value::String(status.as_str().to_string()),
            );
        }
        Some(_) => {}
        None if label != LOW_STOCK_LABEL => {
            map.insert(PRESERVED_LEGACY_STATUS.to_string(), Value::String(label));
        }
        None => {}
    }
}
