//! Public runtime API surface.
//!
//! Gathers the error types exposed to consumers of the runtime crate so the
//! controller and repositories can stay focused on orchestration and storage.

pub mod errors;

pub use errors::{Result, RuntimeError};
