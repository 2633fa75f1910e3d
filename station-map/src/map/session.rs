//! Map session: the filter engine wired to user events.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{Station, StationType};
use crate::filter::{FilterResult, filter_by_text, filter_by_type, reset};

use super::view::{
    DEFAULT_CENTER, DEFAULT_ZOOM, FOCUS_ZOOM, InfoPanel, LatLng, MapViewModel, MarkerView,
    NoopSink, ViewSink,
};

/// State behind one map page.
///
/// Each event recomputes the [`FilterResult`] from the full station list and
/// pushes the new view model to the sink. The full list is never modified.
pub struct MapSession<S: ViewSink = NoopSink> {
    stations: Arc<Vec<Station>>,
    result: FilterResult,
    active: Option<String>,
    not_found: Option<String>,
    sink: S,
}

impl MapSession<NoopSink> {
    /// Create a session without a view sink.
    pub fn new(stations: Arc<Vec<Station>>) -> Self {
        Self::with_sink(stations, NoopSink)
    }
}

impl<S: ViewSink> MapSession<S> {
    /// Create a session showing every station.
    pub fn with_sink(stations: Arc<Vec<Station>>, sink: S) -> Self {
        let result = reset(&stations);
        Self {
            stations,
            result,
            active: None,
            not_found: None,
            sink,
        }
    }

    /// Search by station name.
    ///
    /// A match opens the info window of the first matching station.
    pub fn search(&mut self, query: &str) {
        self.result = filter_by_text(&self.stations, query);
        if self.result.matched {
            self.active = self.result.focus.clone();
            self.not_found = None;
        } else {
            self.active = None;
            self.not_found = Some(format!("No station found matching \"{query}\""));
        }
        debug!(query, visible = self.result.len(), "text filter applied");
        self.notify();
    }

    /// Show only stations of one category.
    pub fn filter_type(&mut self, kind: &StationType) {
        self.result = filter_by_type(&self.stations, kind);
        self.active = None;
        self.not_found = if self.result.matched {
            None
        } else {
            Some(format!("No {kind} stations found"))
        };
        debug!(kind = %kind, visible = self.result.len(), "type filter applied");
        self.notify();
    }

    /// Show every station and clear any not-found message.
    pub fn show_all(&mut self) {
        self.result = reset(&self.stations);
        self.active = None;
        self.not_found = None;
        self.notify();
    }

    /// Open the info window for a visible station.
    ///
    /// Re-selecting the active marker changes nothing. Names that are not
    /// currently visible are ignored.
    pub fn select_marker(&mut self, name: &str) {
        if self.active.as_deref() == Some(name) {
            return;
        }
        if !self.result.items.iter().any(|s| s.name == name) {
            return;
        }
        self.active = Some(name.to_string());
        self.notify();
    }

    /// Close the info window.
    pub fn clear_selection(&mut self) {
        if self.active.take().is_some() {
            self.notify();
        }
    }

    /// The current filter outcome.
    pub fn result(&self) -> &FilterResult {
        &self.result
    }

    /// Name of the station whose info window is open.
    pub fn active_marker(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Message to show when the last filter matched nothing.
    pub fn not_found_message(&self) -> Option<&str> {
        self.not_found.as_deref()
    }

    /// The full station list this session filters.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Access the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Build the view model for the current state.
    pub fn view(&self) -> MapViewModel {
        let active = self.active.as_deref();

        let markers = self
            .result
            .items
            .iter()
            .map(|s| MarkerView::from_station(s, Some(s.name.as_str()) == active))
            .collect();

        let info = active
            .and_then(|name| self.result.items.iter().find(|s| s.name == name))
            .map(|s| InfoPanel {
                name: s.name.clone(),
                details: s.details.clone(),
                position: LatLng::of(s),
            });

        let (center, zoom) = match self.result.focus_station() {
            Some(s) => (LatLng::of(s), FOCUS_ZOOM),
            None => (DEFAULT_CENTER, DEFAULT_ZOOM),
        };

        MapViewModel {
            markers,
            info,
            center,
            zoom,
            not_found: self.not_found.clone(),
        }
    }

    fn notify(&mut self) {
        let view = self.view();
        self.sink.render(&view);
    }
}
