//! StockKeeper application layer
//!
//! Use cases orchestrate the repository ports; [`InventoryState`] is the
//! single in-memory view the UI observes.

pub mod deps;
pub mod error;
pub mod state;
pub mod usecases;

pub use deps::AppDeps;
pub use error::InventoryError;
pub use state::{InventorySnapshot, InventoryState};
