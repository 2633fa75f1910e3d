//! Station dataset loading.
//!
//! The dataset is read once at startup, either from the copy bundled into the
//! binary, a JSON file, or an HTTP URL.

mod error;
mod loader;
mod source;

pub use error::DatasetError;
pub use loader::{bundled, load, parse};
pub use source::DatasetSource;
