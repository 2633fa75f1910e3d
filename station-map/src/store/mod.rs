//! Station cache and the demo write path.
//!
//! The cache mirrors the bundled dataset so that create, update and delete
//! can be demonstrated without touching the source data. The filter engine
//! never reads from it.

mod demo;
mod error;
mod file;
mod memory;

use crate::domain::Station;

pub use demo::{create_station, current, delete_station, seed_if_empty, update_station};
pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// Key-value storage for a copy of the station list.
pub trait StationStore: Send + Sync {
    /// The stored list, or `None` if nothing has been written yet.
    fn get(&self) -> Result<Option<Vec<Station>>, StoreError>;

    /// Replace the stored list.
    fn set(&self, stations: &[Station]) -> Result<(), StoreError>;
}
