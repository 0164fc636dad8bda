use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle position of a device in stock.
///
/// Registration creates devices as `StockIn`; a sale flips them to `StockOut`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceStatus {
    StockIn,
    StockOut,
}

impl DeviceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            DeviceStatus::StockIn => "StockIn",
            DeviceStatus::StockOut => "StockOut",
        }
    }

    /// Human readable label, also the value older records stored in `status`.
    pub fn label(self) -> &'static str {
        match self {
            DeviceStatus::StockIn => "In Stock",
            DeviceStatus::StockOut => "Out of Stock",
        }
    }

    /// Maps a legacy `status` label onto the canonical status.
    ///
    /// `"Low Stock"` has no canonical status and yields `None`.
    pub fn from_legacy_label(label: &str) -> Option<Self> {
        match label {
            "In Stock" => Some(DeviceStatus::StockIn),
            "Out of Stock" => Some(DeviceStatus::StockOut),
            _ => None,
        }
    }
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown device status: {0}")]
pub struct UnknownDeviceStatus(pub String);

impl FromStr for DeviceStatus {
    type Err = UnknownDeviceStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "StockIn" => Ok(DeviceStatus::StockIn),
            "StockOut" => Ok(DeviceStatus::StockOut),
            other => Err(UnknownDeviceStatus(other.to_string())),
        }
    }
}

/// Status filter applied on top of a text search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    InStock,
    SoldOut,
}

impl StatusFilter {
    pub fn matches(self, status: Option<DeviceStatus>) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::InStock => status == Some(DeviceStatus::StockIn),
            StatusFilter::SoldOut => status == Some(DeviceStatus::StockOut),
        }
    }
}
