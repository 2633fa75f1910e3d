//! In-process station store.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::Station;

use super::StationStore;
use super::error::StoreError;

/// Station store held in memory. Contents are lost on exit.
#[derive(Debug, Default)]
pub struct MemoryStore {
    stations: Mutex<Option<Vec<Station>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Vec<Station>>> {
        // The guarded value is replaced wholesale, so a poisoned lock still
        // holds a consistent list.
        self.stations.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StationStore for MemoryStore {
    fn get(&self) -> Result<Option<Vec<Station>>, StoreError> {
        Ok(self.lock().clone())
    }

    fn set(&self, stations: &[Station]) -> Result<(), StoreError> {
        *self.lock() = Some(stations.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let store = MemoryStore::new();
        assert!(store.get().unwrap().is_none());
    }

    #[test]
    fn set_then_get() {
        let store = MemoryStore::new();
        let stations = vec![Station::new("Idu", 9.06, 7.36, "major")];
        store.set(&stations).unwrap();
        assert_eq!(store.get().unwrap(), Some(stations));
    }

    #[test]
    fn set_empty_list_is_not_none() {
        let store = MemoryStore::new();
        store.set(&[]).unwrap();
        assert_eq!(store.get().unwrap(), Some(vec![]));
    }
}
