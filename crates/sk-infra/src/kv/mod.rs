//! Key-value store adapters.

mod file_store;
mod memory_store;

pub use file_store::FileKeyValueStore;
pub use memory_store::InMemoryKeyValueStore;

use sk_core::ports::StoreError;

/// Keys end up as file names, so only a conservative alphabet is accepted.
pub(crate) fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_storage_keys() {
        for key in ["devices", "last_sync", "devices.quarantine", "a-b"] {
            assert!(validate_key(key).is_ok(), "{key} should be valid");
        }
    }

    #[test]
    fn rejects_path_like_keys() {
        for key in ["", "../etc", ".hidden", "a/b", "@devices"] {
            assert!(validate_key(key).is_err(), "{key} should be rejected");
        }
    }
}
