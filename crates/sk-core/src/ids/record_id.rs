use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Identifier of one physical unit of stock.
///
/// Registration usually supplies the IMEI; otherwise a random UUID is used.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(String);

/// Identifier of a generic inventory line item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl_id!(DeviceId, ItemId);
