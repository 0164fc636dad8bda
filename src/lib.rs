//! StockKeeper host shell
//!
//! Loads configuration, installs tracing and wires the storage adapters into
//! the application state. Everything else lives in the `sk-*` crates.

pub mod bootstrap;

pub use sk_app::{InventorySnapshot, InventoryState};
