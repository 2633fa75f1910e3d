//! Station filtering and selection.
//!
//! Every operation here is a pure function of its inputs: the full station
//! list goes in, a [`FilterResult`] comes out. Nothing is cached between
//! calls and nothing performs I/O.

mod engine;
mod style;


pub use engine::{FilterResult, filter_by_text, filter_by_type, reset};
pub use style::{StyleToken, resolve_marker_style};
