//! Railway station map server.
//!
//! Shows the stations of a static dataset on a map, with name search and
//! category filters, plus a demo admin page that edits a cached copy of the
//! dataset.

pub mod config;
pub mod dataset;
pub mod domain;
pub mod filter;
pub mod map;
pub mod store;
pub mod web;
