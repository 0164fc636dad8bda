//! Aggregate statistics derived from the device and inventory collections.

mod price;
mod snapshot;

pub use price::{device_value, parse_price};
pub use snapshot::StatisticsSnapshot;
