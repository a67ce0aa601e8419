//! Deterministic scoring rules for a best-of-N card game match.
//!
//! `match-core` defines the canonical match state, the engine that mutates it,
//! and the read-only view handed to presentation layers. It performs no I/O;
//! persistence and notifications live in the runtime crate. All state
//! mutation flows through [`engine::MatchEngine`].
pub mod config;
pub mod engine;
pub mod error;
pub mod state;
pub mod view;

pub use config::MatchConfig;
pub use engine::{GameOutcome, MatchEngine};
pub use error::{ScoreError, SettingsError};
pub use state::{MatchState, SideState, Team, TeamNames};
pub use view::{ScoreboardView, format_score, game_finished_message};
