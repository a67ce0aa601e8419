//! Scoreboard configuration structures and loaders.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use scoreboard_runtime::{DEFAULT_STORAGE_KEY, InputThrottle, RuntimeConfig};

/// Configuration required to bootstrap a scoreboard front-end.
#[derive(Clone, Debug)]
pub struct ScoreboardConfig {
    /// Record store directory; platform data dir when unset.
    pub data_dir: Option<PathBuf>,
    pub storage_key: String,
    pub input_debounce: Duration,
    pub event_buffer: usize,
    /// Mirror logs to `scoreboard.log` in this directory. Front-ends pass it
    /// to [`logging::init`](crate::logging::init) before building the setup.
    pub log_dir: Option<PathBuf>,
}

impl Default for ScoreboardConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            input_debounce: InputThrottle::DEFAULT_WINDOW,
            event_buffer: 64,
            log_dir: None,
        }
    }
}

impl ScoreboardConfig {
    /// Loads `.env` when present, then reads the environment.
    pub fn load() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_env()
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SCOREBOARD_DATA_DIR` - Record store directory (default: platform-specific)
    /// - `SCOREBOARD_STORAGE_KEY` - Saved match key (default: trucoGameState)
    /// - `SCOREBOARD_INPUT_DEBOUNCE_MS` - Scoring input throttle, 0 disables (default: 300)
    /// - `SCOREBOARD_EVENT_BUFFER` - Per-topic event capacity (default: 64)
    /// - `SCOREBOARD_LOG_DIR` - Optional log file directory
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a caller-supplied source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = non_empty(lookup("SCOREBOARD_DATA_DIR")) {
            config.data_dir = Some(PathBuf::from(dir));
        }

        if let Some(key) = non_empty(lookup("SCOREBOARD_STORAGE_KEY")) {
            config.storage_key = key;
        }

        if let Some(millis) = parse::<u64>(lookup("SCOREBOARD_INPUT_DEBOUNCE_MS")) {
            config.input_debounce = Duration::from_millis(millis);
        }

        if let Some(capacity) = parse::<usize>(lookup("SCOREBOARD_EVENT_BUFFER")) {
            config.event_buffer = capacity.max(1);
        }

        config.log_dir = non_empty(lookup("SCOREBOARD_LOG_DIR")).map(PathBuf::from);

        config
    }

    /// Directory the record store lives in.
    ///
    /// Follows platform conventions:
    /// - Linux: `~/.local/share/scoreboard` (or `$XDG_DATA_HOME/scoreboard`)
    /// - macOS: `~/Library/Application Support/scoreboard`
    /// - Windows: `%APPDATA%\scoreboard`
    /// - Fallback: `./.scoreboard`
    pub fn resolved_data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        directories::ProjectDirs::from("", "", "scoreboard")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("./.scoreboard"))
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            storage_key: self.storage_key.clone(),
            event_buffer_size: self.event_buffer,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

fn parse<T>(value: Option<String>) -> Option<T>
where
    T: std::str::FromStr,
{
    value?.trim().parse().ok()
}
