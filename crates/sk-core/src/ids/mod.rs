//! ID type wrappers for type safety.

mod id_macro;
pub mod record_id;

pub use record_id::{DeviceId, ItemId};
