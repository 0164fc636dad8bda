//! Logical keys of the shared key-value store.
//!
//! Repositories are separated only by key; there is no further partitioning.

pub const DEVICES_KEY: &str = "devices";
pub const INVENTORY_KEY: &str = "inventory";
pub const AUTH_KEY: &str = "auth";
/// Reserved for a future sync feature. Only ever removed.
pub const LAST_SYNC_KEY: &str = "last_sync";
/// Reserved for a future sync feature. Only ever removed.
pub const PENDING_SYNC_KEY: &str = "pending_sync";

/// Suffix under which an unreadable payload is parked before failing.
pub const QUARANTINE_SUFFIX: &str = ".quarantine";

/// Keys wiped by a data reset. Auth survives so the operator stays logged in.
pub const RESETTABLE_KEYS: [&str; 4] = [DEVICES_KEY, INVENTORY_KEY, LAST_SYNC_KEY, PENDING_SYNC_KEY];

pub fn quarantine_key(key: &str) -> String {
    format!("{key}{QUARANTINE_SUFFIX}")
}
