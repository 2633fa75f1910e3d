//! Domain types for the station map.
//!
//! Station records as they appear in the dataset, plus the validation applied
//! to records arriving through the write path.

mod error;
mod station;

pub use error::DomainError;
pub use station::{Station, StationPatch, StationType};
