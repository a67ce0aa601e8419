//! Error types for match operations.
//!
//! Engine operations only fail on invalid caller input. Each failure leaves
//! the match state untouched.

use crate::state::Team;

/// Errors surfaced while applying a scoring event.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScoreError {
    #[error("cannot add zero points to team {team}")]
    ZeroPoints { team: Team },

    #[error("match already decided in favour of team {winner}")]
    MatchDecided { winner: Team },
}

impl ScoreError {
    /// Static identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroPoints { .. } => "SCORE_ZERO_POINTS",
            Self::MatchDecided { .. } => "SCORE_MATCH_DECIDED",
        }
    }
}

/// Errors surfaced while changing the match format.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SettingsError {
    #[error("point limit must be positive")]
    ZeroPointLimit,

    #[error("max games must be a positive odd number (got {max_games})")]
    InvalidMaxGames { max_games: u32 },
}

impl SettingsError {
    /// Static identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroPointLimit => "SETTINGS_ZERO_POINT_LIMIT",
            Self::InvalidMaxGames { .. } => "SETTINGS_INVALID_MAX_GAMES",
        }
    }
}
