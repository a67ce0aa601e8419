//! In-memory StateRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::repository::error::Result;
use crate::repository::{RepositoryError, StateRepository};

/// In-memory implementation of StateRepository.
///
/// Stores raw payloads by key, so tests can plant arbitrary records.
pub struct InMemoryStateRepo {
    records: RwLock<HashMap<String, String>>,
}

impl InMemoryStateRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Create with an initial payload under `key`.
    pub fn with_record(key: impl Into<String>, payload: impl Into<String>) -> Self {
        let mut records = HashMap::new();
        records.insert(key.into(), payload.into());
        Self {
            records: RwLock::new(records),
        }
    }
}

impl Default for InMemoryStateRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl StateRepository for InMemoryStateRepo {
    fn save(&self, key: &str, payload: &str) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        records.insert(key.to_string(), payload.to_string());
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<String>> {
        let records = self
            .records
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(records.get(key).cloned())
    }

    fn exists(&self, key: &str) -> bool {
        self.records
            .read()
            .map(|records| records.contains_key(key))
            .unwrap_or(false)
    }

    fn delete(&self, key: &str) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        records.remove(key);
        Ok(())
    }
}
