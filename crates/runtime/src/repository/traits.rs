//! Repository contracts for saving and loading the match record.

use std::sync::Arc;

use super::error::Result;

/// Durable key-value store holding serialized match records.
///
/// Repositories move opaque payloads; encoding and tolerance for bad data
/// live in [`PersistenceGateway`](super::PersistenceGateway).
pub trait StateRepository: Send + Sync {
    /// Store `payload` under `key`, replacing any previous record.
    fn save(&self, key: &str, payload: &str) -> Result<()>;

    /// Read the record stored under `key`.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Check if a record exists
    fn exists(&self, key: &str) -> bool;

    /// Delete the record under `key`. Deleting a missing record succeeds.
    fn delete(&self, key: &str) -> Result<()>;
}

impl<T> StateRepository for Arc<T>
where
    T: StateRepository + ?Sized,
{
    fn save(&self, key: &str, payload: &str) -> Result<()> {
        (**self).save(key, payload)
    }

    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn exists(&self, key: &str) -> bool {
        (**self).exists(key)
    }

    fn delete(&self, key: &str) -> Result<()> {
        (**self).delete(key)
    }
}
