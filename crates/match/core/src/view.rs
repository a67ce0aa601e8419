//! Read-only projection of the match for presentation layers.

use crate::state::{MatchState, Team};

/// Everything a scoreboard display needs after a mutation, as plain values.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreboardView {
    pub score_a: u32,
    pub score_b: u32,
    /// Top of each history stack, or 0 when empty.
    pub previous_a: u32,
    pub previous_b: u32,
    pub wins_a: u32,
    pub wins_b: u32,
    pub current_game: u32,
    pub max_games: u32,
    pub point_limit: u32,
    pub team_a_name: String,
    pub team_b_name: String,
    pub winner: Option<Team>,
}

impl ScoreboardView {
    pub fn from_state(state: &MatchState) -> Self {
        Self {
            score_a: state.side_a.score,
            score_b: state.side_b.score,
            previous_a: state.side_a.previous_score(),
            previous_b: state.side_b.previous_score(),
            wins_a: state.side_a.wins,
            wins_b: state.side_b.wins,
            current_game: state.current_game,
            max_games: state.config.max_games,
            point_limit: state.config.point_limit,
            team_a_name: state.names.get(Team::A).to_string(),
            team_b_name: state.names.get(Team::B).to_string(),
            winner: state.winner,
        }
    }

    pub fn score(&self, team: Team) -> u32 {
        match team {
            Team::A => self.score_a,
            Team::B => self.score_b,
        }
    }

    pub fn previous(&self, team: Team) -> u32 {
        match team {
            Team::A => self.previous_a,
            Team::B => self.previous_b,
        }
    }

    pub fn team_name(&self, team: Team) -> &str {
        match team {
            Team::A => &self.team_a_name,
            Team::B => &self.team_b_name,
        }
    }

    pub fn formatted_score(&self, team: Team) -> String {
        format_score(self.score(team))
    }

    pub fn formatted_previous(&self, team: Team) -> String {
        format_score(self.previous(team))
    }

    /// Game wins as shown under the winner banner, e.g. `2 x 1`.
    pub fn tally(&self) -> String {
        format!("{} x {}", self.wins_a, self.wins_b)
    }

    /// Banner text for a decided match.
    pub fn winner_banner(&self) -> Option<String> {
        self.winner
            .map(|team| format!("{} GANHOU!", self.team_name(team)))
    }
}

impl From<&MatchState> for ScoreboardView {
    fn from(state: &MatchState) -> Self {
        Self::from_state(state)
    }
}

/// Renders a score as a two-digit zero-padded string.
pub fn format_score(score: u32) -> String {
    format!("{score:02}")
}

/// Message shown when a game ends without deciding the match.
pub fn game_finished_message(finished_game: u32, next_game: u32) -> String {
    format!("Partida {finished_game} finalizada! Começando partida {next_game}")
}
