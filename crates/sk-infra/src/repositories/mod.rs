//! Repository adapters backed by the key-value store.

mod auth_repo;
mod device_repo;
mod inventory_repo;

pub use auth_repo::KvAuthStateRepository;
pub use device_repo::KvDeviceRepository;
pub use inventory_repo::KvInventoryRepository;
