//! Scoring, undo and match progression.
//!
//! The [`MatchEngine`] is the authoritative reducer for [`MatchState`]. Every
//! operation runs to completion against the borrowed state before returning,
//! so back-to-back calls never observe a half-applied event.

mod outcome;

pub use outcome::GameOutcome;

use crate::config::MatchConfig;
use crate::error::{ScoreError, SettingsError};
use crate::state::{MatchState, Team, TeamNames};

/// Engine that applies scoring events and resets to a borrowed match state.
pub struct MatchEngine<'a> {
    state: &'a mut MatchState,
}

impl<'a> MatchEngine<'a> {
    /// Creates a new engine over the given state.
    pub fn new(state: &'a mut MatchState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &MatchState {
        self.state
    }

    /// Adds `points` to `team` and evaluates the game.
    ///
    /// The pre-increment score is pushed onto the team's history so a single
    /// [`undo_score`](Self::undo_score) restores it. Rejected without mutation
    /// when `points` is zero or the match is already decided.
    pub fn add_score(&mut self, team: Team, points: u32) -> Result<GameOutcome, ScoreError> {
        if points == 0 {
            return Err(ScoreError::ZeroPoints { team });
        }
        if let Some(winner) = self.state.winner {
            return Err(ScoreError::MatchDecided { winner });
        }

        let side = self.state.side_mut(team);
        side.history.push(side.score);
        side.score = side.score.saturating_add(points);

        Ok(self.check_completion())
    }

    /// Restores the score `team` had before its last scoring event.
    ///
    /// Returns the restored score, or `None` when the history is empty and
    /// nothing changed. Wins, the game counter and the other side are never
    /// touched, and no completion check runs.
    pub fn undo_score(&mut self, team: Team) -> Option<u32> {
        let side = self.state.side_mut(team);
        let previous = side.history.pop()?;
        side.score = previous;
        Some(previous)
    }

    /// Evaluates the game in progress against the point limit.
    ///
    /// Side A is checked before side B. A decided match reports no further
    /// winners.
    pub fn check_completion(&mut self) -> GameOutcome {
        if self.state.is_decided() {
            return GameOutcome::NoWinner;
        }

        let limit = self.state.config.point_limit;
        let Some(winner) = Team::ALL
            .into_iter()
            .find(|&team| self.state.score(team) >= limit)
        else {
            return GameOutcome::NoWinner;
        };

        self.award_game(winner)
    }

    fn award_game(&mut self, winner: Team) -> GameOutcome {
        let wins_needed = self.state.config.wins_needed();
        let side = self.state.side_mut(winner);
        side.wins = side.wins.saturating_add(1);

        if side.wins >= wins_needed {
            self.state.winner = Some(winner);
            return GameOutcome::MatchWon {
                winner,
                wins_a: self.state.side_a.wins,
                wins_b: self.state.side_b.wins,
            };
        }

        let finished_game = self.state.current_game;
        self.state.current_game = self.state.current_game.saturating_add(1);
        self.state.clear_game();

        GameOutcome::NextGame {
            winner,
            finished_game,
            next_game: self.state.current_game,
        }
    }

    /// Starts a new match with the current format and team names.
    pub fn start_new_match(&mut self) {
        self.restart();
    }

    /// Clears scores and histories of the game in progress only.
    ///
    /// Wins, the game counter and a decided match are left as they are.
    pub fn reset_game(&mut self) {
        self.state.clear_game();
    }

    /// Clears the game in progress together with wins, returning to game 1.
    ///
    /// Format and team names are preserved.
    pub fn reset_match(&mut self) {
        self.restart();
    }

    fn restart(&mut self) {
        let names = std::mem::take(&mut self.state.names);
        *self.state = MatchState::new(self.state.config, names);
    }

    /// Replaces the match format.
    ///
    /// Applies from the next completion check on; a threshold already
    /// crossed in the current game is not re-evaluated here.
    pub fn update_settings(
        &mut self,
        point_limit: u32,
        max_games: u32,
    ) -> Result<(), SettingsError> {
        self.state.config = MatchConfig::new(point_limit, max_games)?;
        Ok(())
    }

    /// Normalizes and stores the team labels.
    pub fn update_team_names(&mut self, name_a: &str, name_b: &str) {
        self.state.names = TeamNames::new(name_a, name_b);
    }
}
