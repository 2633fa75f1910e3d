//! Web layer for the station map.
//!
//! Serves the map page, the admin page for the demo cache, and a JSON API
//! over the filter engine.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
