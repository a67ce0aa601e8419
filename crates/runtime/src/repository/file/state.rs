//! File-based StateRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::repository::error::Result;
use crate::repository::{RepositoryError, StateRepository};

/// File-based implementation of StateRepository.
///
/// Each key maps to one `{key}.json` file under the base directory. Writes go
/// to a temporary file first and are renamed into place, so a crash mid-write
/// never leaves a truncated record behind.
pub struct FileStateRepository {
    base_dir: PathBuf,
}

impl FileStateRepository {
    /// Create a new file-based state repository.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    /// Get the path to a record file.
    fn record_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
            && !key.starts_with('.');
        if !valid {
            return Err(RepositoryError::InvalidKey(key.to_string()));
        }
        Ok(self.base_dir.join(format!("{}.json", key)))
    }
}

impl StateRepository for FileStateRepository {
    fn save(&self, key: &str, payload: &str) -> Result<()> {
        let path = self.record_path(key)?;
        let temp_path = path.with_extension("json.tmp");

        // Write to temp file
        fs::write(&temp_path, payload).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved record '{}' to {}", key, path.display());

        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.record_path(key)?;

        if !path.exists() {
            return Ok(None);
        }

        let payload = fs::read_to_string(&path).map_err(RepositoryError::Io)?;

        tracing::debug!("Loaded record '{}' from {}", key, path.display());

        Ok(Some(payload))
    }

    fn exists(&self, key: &str) -> bool {
        self.record_path(key)
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    fn delete(&self, key: &str) -> Result<()> {
        let path = self.record_path(key)?;

        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
            tracing::debug!("Deleted record '{}'", key);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStateRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileStateRepository::new(temp_dir.path()).unwrap();
        (temp_dir, repo)
    }

    #[test]
    fn test_save_and_load() {
        let (_temp, repo) = setup();

        repo.save("trucoGameState", r#"{"scoreA":3}"#).unwrap();

        let loaded = repo.load("trucoGameState").unwrap();
        assert_eq!(loaded.as_deref(), Some(r#"{"scoreA":3}"#));
        assert!(repo.exists("trucoGameState"));
    }

    #[test]
    fn test_save_replaces_previous_record() {
        let (temp, repo) = setup();

        repo.save("match", "first").unwrap();
        repo.save("match", "second").unwrap();

        assert_eq!(repo.load("match").unwrap().as_deref(), Some("second"));
        assert!(!temp.path().join("match.json.tmp").exists());
    }

    #[test]
    fn test_missing_key_loads_none() {
        let (_temp, repo) = setup();
        assert!(repo.load("match").unwrap().is_none());
        assert!(!repo.exists("match"));
    }

    #[test]
    fn test_delete() {
        let (_temp, repo) = setup();

        repo.save("match", "{}").unwrap();
        repo.delete("match").unwrap();
        repo.delete("match").unwrap();

        assert!(repo.load("match").unwrap().is_none());
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let (_temp, repo) = setup();

        for key in ["", "../escape", "a/b", ".hidden"] {
            let err = repo.save(key, "{}").unwrap_err();
            assert!(matches!(err, RepositoryError::InvalidKey(_)), "{key}");
        }
    }
}
