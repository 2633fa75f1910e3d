//! JSON file station store.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::Station;

use super::StationStore;
use super::error::StoreError;

/// Cached station data with metadata.
#[derive(Debug, Serialize, Deserialize)]
struct CachedStations {
    /// Unix timestamp when the cache was written.
    cached_at_secs: u64,
    /// The cached station data.
    stations: Vec<Station>,
}

/// Station store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the cache file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Unix timestamp of the last write, if the file is readable.
    pub fn cached_at(&self) -> Option<u64> {
        self.read().map(|c| c.cached_at_secs)
    }

    fn read(&self) -> Option<CachedStations> {
        let contents = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(cached) => Some(cached),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "ignoring unreadable station cache");
                None
            }
        }
    }
}

impl StationStore for FileStore {
    /// A missing or unreadable file reads as an empty cache.
    fn get(&self) -> Result<Option<Vec<Station>>, StoreError> {
        Ok(self.read().map(|c| c.stations))
    }

    /// Creates parent directories if they don't exist.
    fn set(&self, stations: &[Station]) -> Result<(), StoreError> {
        let now = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map_err(|_| StoreError::Cache {
                message: "system time before unix epoch".to_string(),
            })?
            .as_secs();

        let cached = CachedStations {
            cached_at_secs: now,
            stations: stations.to_vec(),
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Cache {
                message: format!("failed to create cache directory: {}", e),
            })?;
        }

        let json = serde_json::to_string_pretty(&cached).map_err(|e| StoreError::Cache {
            message: format!("failed to serialize cache: {}", e),
        })?;

        std::fs::write(&self.path, json).map_err(|e| StoreError::Cache {
            message: format!("failed to write cache file: {}", e),
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn stations() -> Vec<Station> {
        vec![
            Station::new("Idu Station", 9.0644, 7.3581, "major").with_details("Abuja"),
            Station::new("Kubwa Station", 9.1541, 7.3222, "minor"),
        ]
    }

    #[test]
    fn save_and_load() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("stations.json"));

        store.set(&stations()).unwrap();

        let loaded = store.get().unwrap().unwrap();
        assert_eq!(loaded, stations());
        assert!(store.cached_at().is_some());
    }

    #[test]
    fn missing_file_reads_as_none() {
        let store = FileStore::new("/nonexistent/path/stations.json");
        assert!(store.get().unwrap().is_none());
        assert!(store.cached_at().is_none());
    }

    #[test]
    fn corrupt_file_reads_as_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stations.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FileStore::new(&path);
        assert!(store.get().unwrap().is_none());
    }

    #[test]
    fn creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("dir").join("stations.json");
        let store = FileStore::new(&path);

        store.set(&stations()).unwrap();
        assert!(path.exists());
        assert_eq!(store.path(), path.as_path());
    }

    #[test]
    fn overwrite_replaces_contents() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("stations.json"));

        store.set(&stations()).unwrap();
        store.set(&stations()[..1]).unwrap();

        assert_eq!(store.get().unwrap().unwrap().len(), 1);
    }
}
