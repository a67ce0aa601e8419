//! Tracing subscriber setup for front-ends.
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

pub const LOG_FILE_NAME: &str = "scoreboard.log";

/// Installs the global subscriber filtered by `RUST_LOG` (default `info`):
/// stderr always, plus `scoreboard.log` in `log_dir` when given.
///
/// Keep the returned guard alive for as long as file logging should flush.
pub fn init(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .context("installing tracing subscriber")?;

    if let Some(dir) = log_dir {
        tracing::info!("Log file: {}", dir.join(LOG_FILE_NAME).display());
    }

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoreboardConfig;

    #[test]
    fn installs_once_and_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let logs = dir.path().join("logs");
        let logs_var = logs.to_string_lossy().into_owned();
        let config = ScoreboardConfig::from_lookup(|key| {
            (key == "SCOREBOARD_LOG_DIR").then(|| logs_var.clone())
        });

        let guard = init(config.log_dir.as_deref()).unwrap();
        assert!(guard.is_some());
        tracing::info!("scoreboard logging test");
        drop(guard);

        assert!(logs.join(LOG_FILE_NAME).exists());
        assert!(init(None).is_err());
    }
}
