//! Builds the scoreboard controller and input throttle used by front-ends.
use anyhow::{Context, Result};
use scoreboard_runtime::{FileStateRepository, InputThrottle, Scoreboard};

use crate::config::ScoreboardConfig;

/// Everything a front-end needs to start taking input.
pub struct ScoreboardSetup {
    pub config: ScoreboardConfig,
    pub scoreboard: Scoreboard<FileStateRepository>,
    pub throttle: InputThrottle,
}

impl ScoreboardSetup {
    /// Opens the record store and restores the saved match, if any.
    pub fn build(config: ScoreboardConfig) -> Result<Self> {
        let data_dir = config.resolved_data_dir();
        let repository = FileStateRepository::new(&data_dir)
            .with_context(|| format!("opening record store at {}", data_dir.display()))?;

        tracing::debug!(dir = %data_dir.display(), key = %config.storage_key, "Opening scoreboard");

        let scoreboard = Scoreboard::builder(repository)
            .config(config.runtime_config())
            .build();
        let throttle = InputThrottle::new(config.input_debounce);

        tracing::info!(
            game = scoreboard.state().current_game,
            point_limit = scoreboard.state().config.point_limit,
            max_games = scoreboard.state().config.max_games,
            "Scoreboard ready"
        );

        Ok(Self {
            config,
            scoreboard,
            throttle,
        })
    }
}
