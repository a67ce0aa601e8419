//! Unified error types surfaced by the runtime API.
//!
//! Storage failures never reach controller callers; they are absorbed by the
//! persistence gateway. What remains is rejected input.
use thiserror::Error;

use match_core::{ScoreError, SettingsError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Score(#[from] ScoreError),

    #[error(transparent)]
    Settings(#[from] SettingsError),
}

impl RuntimeError {
    /// Static identifier of the underlying rejection.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Score(error) => error.error_code(),
            Self::Settings(error) => error.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use match_core::Team;

    #[test]
    fn error_code_comes_from_the_rejection() {
        let error = RuntimeError::from(ScoreError::ZeroPoints { team: Team::B });
        assert_eq!(error.error_code(), "SCORE_ZERO_POINTS");
        assert_eq!(error.to_string(), "cannot add zero points to team B");

        let error = RuntimeError::from(SettingsError::ZeroPointLimit);
        assert_eq!(error.error_code(), "SETTINGS_ZERO_POINT_LIMIT");
    }
}
