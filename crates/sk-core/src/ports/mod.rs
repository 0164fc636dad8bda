//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. The core stays independent of how
//! and where records are actually stored.
//!
//! ## Port Placement Guidelines
//!
//! Before adding a new port here, ask:
//!
//! 1. **Does this port represent a business capability?**
//! 2. **Will it be depended upon by multiple use cases?**
//! 3. **Is it implemented by the infrastructure layer?**
//!
//! If all three answers are **yes**, it belongs in `sk-core/ports`.

pub mod app_dirs;
pub mod auth_repository;
mod clock;
pub mod device_repository;
pub mod errors;
pub mod inventory_repository;
pub mod key_value_store;

pub use app_dirs::AppDirsPort;
pub use auth_repository::AuthStateRepositoryPort;
pub use clock::*;
pub use device_repository::DeviceRepositoryPort;
pub use errors::{AppDirsError, RepositoryError, StoreError};
pub use inventory_repository::InventoryRepositoryPort;
pub use key_value_store::KeyValueStorePort;
