//! Repository layer for the saved match
//!
//! Repositories move opaque records in and out of a durable key-value store.
//! The [`PersistenceGateway`] encodes the match into a [`SavedMatch`] record
//! and absorbs every storage failure, so callers only ever see a match or
//! nothing.

mod error;
mod file;
mod gateway;
mod memory;
mod record;
mod traits;

pub use error::{RepositoryError, Result, StorageFault};
pub use file::FileStateRepository;
pub use gateway::{DEFAULT_STORAGE_KEY, PersistenceGateway};
pub use memory::InMemoryStateRepo;
pub use record::SavedMatch;
pub use traits::StateRepository;
