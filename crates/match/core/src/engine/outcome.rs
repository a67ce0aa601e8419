use crate::state::Team;

/// Result of evaluating the game in progress against the point limit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameOutcome {
    /// Neither side has reached the point limit.
    NoWinner,

    /// A side won the game without deciding the match. Scores and histories
    /// were cleared and `next_game` is now in progress.
    NextGame {
        winner: Team,
        finished_game: u32,
        next_game: u32,
    },

    /// A side won the game and, with it, the match. Scores are kept as they
    /// stood when the final point was added.
    MatchWon {
        winner: Team,
        wins_a: u32,
        wins_b: u32,
    },
}

impl GameOutcome {
    /// Side that won a game in this evaluation, if any.
    pub const fn game_winner(&self) -> Option<Team> {
        match self {
            Self::NoWinner => None,
            Self::NextGame { winner, .. } | Self::MatchWon { winner, .. } => Some(*winner),
        }
    }

    pub const fn is_match_won(&self) -> bool {
        matches!(self, Self::MatchWon { .. })
    }
}
