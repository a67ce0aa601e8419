//! Authoritative match state representation.
//!
//! This module owns the data describing scores, undo history, game wins and
//! match format. Runtime layers clone or query this state but mutate it
//! exclusively through the engine.
mod team;

pub use team::{Team, TeamNames};

use crate::config::MatchConfig;

/// Running totals for one side of the match.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SideState {
    /// Score in the game in progress.
    pub score: u32,
    /// Scores before each scoring event of the current game, oldest first.
    pub history: Vec<u32>,
    /// Games won in the current match.
    pub wins: u32,
}

impl SideState {
    /// Score before the most recent scoring event, or 0 when there is none.
    pub fn previous_score(&self) -> u32 {
        self.history.last().copied().unwrap_or(0)
    }

    fn clear_game(&mut self) {
        self.score = 0;
        self.history.clear();
    }
}

/// Canonical snapshot of a match.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchState {
    pub side_a: SideState,
    pub side_b: SideState,
    /// 1-indexed ordinal of the game in progress.
    pub current_game: u32,
    pub config: MatchConfig,
    pub names: TeamNames,
    /// Set once a side reaches the required game wins.
    pub winner: Option<Team>,
}

impl MatchState {
    /// Creates a fresh match at game 1 with the given format and labels.
    pub fn new(config: MatchConfig, names: TeamNames) -> Self {
        Self {
            side_a: SideState::default(),
            side_b: SideState::default(),
            current_game: 1,
            config,
            names,
            winner: None,
        }
    }

    pub fn side(&self, team: Team) -> &SideState {
        match team {
            Team::A => &self.side_a,
            Team::B => &self.side_b,
        }
    }

    pub fn side_mut(&mut self, team: Team) -> &mut SideState {
        match team {
            Team::A => &mut self.side_a,
            Team::B => &mut self.side_b,
        }
    }

    pub fn score(&self, team: Team) -> u32 {
        self.side(team).score
    }

    pub fn wins(&self, team: Team) -> u32 {
        self.side(team).wins
    }

    pub fn is_decided(&self) -> bool {
        self.winner.is_some()
    }

    /// Side whose game wins already satisfy the match format, checking A first.
    ///
    /// Used to rebuild the decided flag from records that did not store it.
    pub fn leader_with_required_wins(&self) -> Option<Team> {
        let needed = self.config.wins_needed();
        Team::ALL
            .into_iter()
            .find(|&team| self.wins(team) >= needed)
    }

    /// Clears scores and histories of the game in progress.
    pub(crate) fn clear_game(&mut self) {
        self.side_a.clear_game();
        self.side_b.clear_game();
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new(MatchConfig::default(), TeamNames::default())
    }
}
