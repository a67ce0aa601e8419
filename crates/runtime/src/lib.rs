//! Runtime orchestration for the match scoreboard.
//!
//! This crate wires the pure match engine to durable storage and to the
//! presentation layer. Consumers embed a [`Scoreboard`] to apply user events,
//! subscribe to notifications, and read the display view.
//!
//! Modules are organized by responsibility:
//! - [`scoreboard`] hosts the controller and its builder
//! - [`api`] exposes the error types callers handle
//! - [`events`] provides the topic-based event bus
//! - [`repository`] provides the storage backends and the persistence gateway
//! - [`throttle`] and [`feedback`] are optional presentation-side adapters
pub mod api;
pub mod events;
pub mod feedback;
pub mod repository;
pub mod scoreboard;
pub mod throttle;

pub use api::{Result, RuntimeError};
pub use events::{DisplayEvent, Event, EventBus, MatchEvent, Mutation, Topic};
pub use feedback::{
    FeedbackAdapter, FeedbackError, NoopFeedback, dispatch_feedback, keep_screen_awake,
};
pub use repository::{
    DEFAULT_STORAGE_KEY, FileStateRepository, InMemoryStateRepo, PersistenceGateway,
    RepositoryError, SavedMatch, StateRepository, StorageFault,
};
pub use scoreboard::{RuntimeConfig, Scoreboard, ScoreboardBuilder};
pub use throttle::InputThrottle;
