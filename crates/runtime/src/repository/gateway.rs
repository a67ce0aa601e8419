//! Best-effort persistence of the match under a single fixed key.

use match_core::MatchState;

use super::error::Result;
use super::record::SavedMatch;
use super::traits::StateRepository;

/// Key the match is saved under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "trucoGameState";

/// Saves and restores the match through a [`StateRepository`].
///
/// `save` and `load` never fail: storage errors are logged and the caller
/// keeps its in-memory state or falls back to defaults. The `try_*`
/// variants expose the underlying error for callers that want it.
pub struct PersistenceGateway<R> {
    repository: R,
    key: String,
}

impl<R: StateRepository> PersistenceGateway<R> {
    pub fn new(repository: R) -> Self {
        Self::with_key(repository, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(repository: R, key: impl Into<String>) -> Self {
        Self {
            repository,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Writes the full match. Failures are logged and dropped.
    pub fn save(&self, state: &MatchState) {
        if let Err(error) = self.try_save(state) {
            tracing::warn!(
                key = %self.key,
                fault = %error.fault(),
                "Failed to save match state: {}",
                error
            );
        }
    }

    pub fn try_save(&self, state: &MatchState) -> Result<()> {
        let record = SavedMatch::from_state(state, Some(chrono::Utc::now().timestamp_millis()));
        let payload = record.to_json()?;
        self.repository.save(&self.key, &payload)
    }

    /// Reads the saved match, or `None` when it is absent or unusable.
    pub fn load(&self) -> Option<MatchState> {
        match self.try_load() {
            Ok(state) => state,
            Err(error) => {
                tracing::warn!(
                    key = %self.key,
                    fault = %error.fault(),
                    "Discarding saved match state: {}",
                    error
                );
                None
            }
        }
    }

    pub fn try_load(&self) -> Result<Option<MatchState>> {
        let Some(payload) = self.repository.load(&self.key)? else {
            return Ok(None);
        };
        let record = SavedMatch::from_json(&payload)?;
        Ok(Some(record.into_state()))
    }

    /// Removes the saved record. Failures are logged and dropped.
    pub fn clear(&self) {
        if let Err(error) = self.repository.delete(&self.key) {
            tracing::warn!(
                key = %self.key,
                fault = %error.fault(),
                "Failed to clear saved match state: {}",
                error
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemoryStateRepo, RepositoryError, StorageFault};
    use match_core::{MatchConfig, MatchEngine, Team, TeamNames};

    struct UnavailableRepo;

    impl StateRepository for UnavailableRepo {
        fn save(&self, _key: &str, _payload: &str) -> Result<()> {
            Err(RepositoryError::Io(std::io::Error::other("quota exceeded")))
        }

        fn load(&self, _key: &str) -> Result<Option<String>> {
            Err(RepositoryError::Io(std::io::Error::other("storage disabled")))
        }

        fn exists(&self, _key: &str) -> bool {
            false
        }

        fn delete(&self, _key: &str) -> Result<()> {
            Err(RepositoryError::LockPoisoned)
        }
    }

    fn played_state() -> MatchState {
        let mut state = MatchState::new(MatchConfig::new(15, 5).unwrap(), TeamNames::default());
        let mut engine = MatchEngine::new(&mut state);
        engine.update_team_names("nós", "eles");
        engine.add_score(Team::A, 15).unwrap();
        engine.add_score(Team::B, 3).unwrap();
        engine.add_score(Team::B, 1).unwrap();
        engine.add_score(Team::A, 6).unwrap();
        state
    }

    #[test]
    fn round_trips_every_field() {
        let gateway = PersistenceGateway::new(InMemoryStateRepo::new());
        let state = played_state();

        gateway.save(&state);

        assert_eq!(gateway.load(), Some(state));
    }

    #[test]
    fn absent_record_loads_none() {
        let gateway = PersistenceGateway::new(InMemoryStateRepo::new());
        assert_eq!(gateway.load(), None);
        assert!(gateway.try_load().unwrap().is_none());
    }

    #[test]
    fn malformed_record_loads_none() {
        let repo = InMemoryStateRepo::with_record(DEFAULT_STORAGE_KEY, "{\"scoreA\": 3,");
        let gateway = PersistenceGateway::new(repo);

        assert_eq!(gateway.load(), None);
        assert_eq!(
            gateway.try_load().unwrap_err().fault(),
            StorageFault::MalformedRecord
        );
    }

    #[test]
    fn unavailable_storage_is_absorbed() {
        let gateway = PersistenceGateway::new(UnavailableRepo);
        let state = played_state();

        gateway.save(&state);
        gateway.clear();

        assert_eq!(gateway.load(), None);
        assert_eq!(
            gateway.try_save(&state).unwrap_err().fault(),
            StorageFault::StorageUnavailable
        );
    }

    #[test]
    fn records_live_under_the_configured_key() {
        let gateway = PersistenceGateway::with_key(InMemoryStateRepo::new(), "placar");
        gateway.save(&MatchState::default());

        assert!(gateway.repository().exists("placar"));
        assert!(!gateway.repository().exists(DEFAULT_STORAGE_KEY));

        gateway.clear();
        assert!(!gateway.repository().exists("placar"));
    }
}
