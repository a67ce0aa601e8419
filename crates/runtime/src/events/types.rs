//! Event types for different topics.

use match_core::{ScoreboardView, Team};
use serde::{Deserialize, Serialize};

/// Operation that changed the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mutation {
    ScoreAdded { team: Team, points: u32 },
    ScoreUndone { team: Team },
    GameCompleted,
    NewMatch,
    GameReset,
    MatchReset,
    SettingsUpdated,
    NamesUpdated,
}

/// Display refresh carrying the view as it stands after a mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayEvent {
    pub mutation: Mutation,
    pub view: ScoreboardView,
}

/// Match progression notifications for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// A game ended without deciding the match.
    GameFinished {
        winner: Team,
        finished_game: u32,
        next_game: u32,
    },

    /// A side took the match.
    MatchWon {
        team: Team,
        wins_a: u32,
        wins_b: u32,
        team_name: String,
    },
}
