pub mod fs;
pub mod kv;
pub mod repositories;
pub mod store;
pub mod time;

pub use fs::DirsAppDirsAdapter;
pub use kv::{FileKeyValueStore, InMemoryKeyValueStore};
pub use repositories::{
    KvAuthStateRepository, KvDeviceRepository, KvInventoryRepository,
};
pub use time::SystemClock;
