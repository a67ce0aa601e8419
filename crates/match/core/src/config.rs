use crate::error::SettingsError;

/// Match format: how many points win a game and how many games make a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchConfig {
    /// Score a side must reach to win the current game.
    pub point_limit: u32,
    /// Best-of count. Always a positive odd number.
    pub max_games: u32,
}

impl MatchConfig {
    pub const DEFAULT_POINT_LIMIT: u32 = 12;
    pub const DEFAULT_MAX_GAMES: u32 = 3;

    /// Builds a validated configuration.
    pub fn new(point_limit: u32, max_games: u32) -> Result<Self, SettingsError> {
        let config = Self {
            point_limit,
            max_games,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the configuration against the match format rules.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.point_limit == 0 {
            return Err(SettingsError::ZeroPointLimit);
        }
        if self.max_games == 0 || self.max_games % 2 == 0 {
            return Err(SettingsError::InvalidMaxGames {
                max_games: self.max_games,
            });
        }
        Ok(())
    }

    /// Game wins required to take the match: `ceil(max_games / 2)`.
    pub const fn wins_needed(&self) -> u32 {
        self.max_games.div_ceil(2)
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            point_limit: Self::DEFAULT_POINT_LIMIT,
            max_games: Self::DEFAULT_MAX_GAMES,
        }
    }
}
