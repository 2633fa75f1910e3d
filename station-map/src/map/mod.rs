//! Map page state and view model.
//!
//! [`MapSession`] replaces implicit re-render-on-change: every user event is
//! a method call that recomputes the filter result and pushes a
//! [`MapViewModel`] to a [`ViewSink`].

mod session;
mod view;

pub use session::MapSession;
pub use view::{
    DEFAULT_CENTER, DEFAULT_ZOOM, FOCUS_ZOOM, InfoPanel, LatLng, MapViewModel, MarkerView,
    NoopSink, ViewSink,
};
