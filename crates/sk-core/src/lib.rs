//! # sk-core
//!
//! Core domain models and business logic for StockKeeper.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod app_dirs;
pub mod auth;
pub mod config;
pub mod device;
pub mod ids;
pub mod inventory;
pub mod persistence;
pub mod ports;
pub mod statistics;
pub mod stock;

// Re-export commonly used types at the crate root
pub use auth::{AuthState, UserRole};
pub use config::AppConfig;
pub use device::{Device, DeviceDetails, DeviceDraft, DevicePatch, DeviceStatus};
pub use ids::{DeviceId, ItemId};
pub use inventory::{InventoryItem, InventoryItemDraft};
pub use statistics::StatisticsSnapshot;
