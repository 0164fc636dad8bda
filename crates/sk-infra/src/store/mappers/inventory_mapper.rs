use serde_json::{Map, Value};

use sk_core::inventory::InventoryItem;

use super::{
    drop_nulls, into_object, normalize_id, normalize_timestamps, stringify_fields, MappingError,
};

const TEXT_FIELDS: &[&str] = &["name", "sku", "unitPrice", "notes"];
/// Where a quantity that is not a whole non-negative number is kept.
const PRESERVED_QUANTITY: &str = "rawQuantity";

pub fn inventory_item_from_value(value: Value) -> Result<InventoryItem, MappingError> {
    let mut map = into_object(value)?;
    drop_nulls(&mut map);
    normalize_id(&mut map)?;
    normalize_timestamps(&mut map);
    stringify_fields(&mut map, TEXT_FIELDS);
    normalize_quantity(&mut map);

    Ok(serde_json::from_value(Value::Object(map))?)
}

fn normalize_quantity(map: &mut Map<String, Value>) {
    let Some(raw) = map.remove("quantity") else {
        return;
    };

    let parsed = match &raw {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    };

    match parsed {
        Some(quantity) => {
            map.insert("quantity".to_string(), Value::from(quantity));
        }
        None => {
            map.insert(PRESERVED_QUANTITY.to_string(), raw);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_item_with_textual_quantity() {
        let item = inventory_item_from_value(json!({
            "id": "cable-1",
            "name": "USB-C cable",
            "quantity": "12",
            "createdAt": "2024-05-01T10:00:00Z",
            "updatedAt": "2024-05-02T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(item.details.name, "USB-C cable");
        assert_eq!(item.details.quantity, Some(12));
        assert!(item.updated_at > item.created_at);
    }

    #[test]
    fn unusable_quantity_is_preserved() {
        let item = inventory_item_from_value(json!({ "id": "x", "quantity": "a dozen" })).unwrap();

        assert_eq!(item.details.quantity, None);
        assert_eq!(item.details.extra["rawQuantity"], "a dozen");
    }

    #[test]
    fn missing_name_decodes_as_empty() {
        let item = inventory_item_from_value(json!({ "id": 17 })).unwrap();
        assert_eq!(item.id.as_str(), "17");
        assert_eq!(item.details.name, "");
    }
}
