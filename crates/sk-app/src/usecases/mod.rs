//! Business use cases, one struct per user-visible operation.
//!
//! Each holds only the ports it needs and exposes a single `execute`.

pub mod add_inventory_item;
pub mod compute_statistics;
pub mod delete_device;
pub mod get_device;
pub mod load_inventory_data;
pub mod register_device;
pub mod reset_data;
pub mod search_devices;
pub mod session;
pub mod stock_out_device;
pub mod update_device;

pub use add_inventory_item::AddInventoryItem;
pub use compute_statistics::ComputeStatistics;
pub use delete_device::DeleteDevice;
pub use get_device::{FindDeviceForStockOut, GetDeviceById};
pub use load_inventory_data::{InventoryData, LoadInventoryData};
pub use register_device::RegisterDevice;
pub use reset_data::ResetData;
pub use search_devices::SearchDevices;
pub use session::{Login, Logout, RestoreSession};
pub use stock_out_device::StockOutDevice;
pub use update_device::UpdateDevice;
