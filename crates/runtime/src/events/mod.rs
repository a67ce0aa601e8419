//! Topic-based event bus for scoreboard notifications.
//!
//! Events are published to specific topics, and presentation consumers
//! subscribe only to the topics they need. Events never mutate the match.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{DisplayEvent, MatchEvent, Mutation};
