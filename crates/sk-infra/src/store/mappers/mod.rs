//! Stored JSON → domain record mappers.
//!
//! Stored records come from two schema generations: older ones carry a
//! human-readable `status` label, newer ones a `deviceStatus` enum. Mappers
//! fold both into the canonical domain shape so nothing downstream branches
//! on legacy fields.

mod device_mapper;
mod inventory_mapper;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::store::StoredRecord;
use sk_core::{Device, InventoryItem};

pub use device_mapper::device_from_value;
pub use inventory_mapper::inventory_item_from_value;

#[derive(Debug, Error)]
pub enum MappingError {
    #[error("record is not a JSON object")]
    NotAnObject,

    #[error("record has no usable `id`")]
    MissingId,

    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

impl StoredRecord for Device {
    fn decode(value: Value) -> Result<Self, MappingError> {
        device_from_value(value)
    }
}

impl StoredRecord for InventoryItem {
    fn decode(value: Value) -> Result<Self, MappingError> {
        inventory_item_from_value(value)
    }
}

pub(crate) fn into_object(value: Value) -> Result<Map<String, Value>, MappingError> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(MappingError::NotAnObject),
    }
}

/// Nulls carry no information and trip up non-optional fields.
pub(crate) fn drop_nulls(map: &mut Map<String, Value>) {
    map.retain(|_, value| !value.is_null());
}

/// Ids were sometimes stored as bare numbers (millisecond timestamps).
pub(crate) fn normalize_id(map: &mut Map<String, Value>) -> Result<(), MappingError> {
    let id = match map.get("id") {
        Some(Value::String(s)) if !s.is_empty() => return Ok(()),
        Some(Value::Number(n)) => n.to_string(),
        _ => return Err(MappingError::MissingId),
    };
    map.insert("id".to_string(), Value::String(id));
    Ok(())
}

/// Fills a missing timestamp from its sibling, or the epoch if both are gone.
pub(crate) fn normalize_timestamps(map: &mut Map<String, Value>) {
    let created = map.get("createdAt").cloned();
    let updated = map.get("updatedAt").cloned();
    let epoch = || Value::String(DateTime::<Utc>::default().to_rfc3339());

    match (created, updated) {
        (Some(_), Some(_)) => {}
        (Some(created), None) => {
            map.insert("updatedAt".to_string(), created);
        }
        (None, Some(updated)) => {
            map.insert("createdAt".to_string(), updated);
        }
        (None, None) => {
            map.insert("createdAt".to_string(), epoch());
            map.insert("updatedAt".to_string(), epoch());
        }
    }
}

/// Numbers typed into text fields are kept as their textual form.
pub(crate) fn stringify_fields(map: &mut Map<String, Value>, fields: &[&str]) {
    for field in fields {
        let Some(value) = map.get_mut(*field) else {
            continue;
        };
        let text = match value {
            Value::Number(n) => n.to_string(),
            _ => continue,
        };
        *value = Value::String(text);
    }
}
