//! View model handed to the display layer.

use serde::Serialize;

use crate::domain::Station;
use crate::filter::{StyleToken, resolve_marker_style};

/// Default map centre: central Nigeria.
pub const DEFAULT_CENTER: LatLng = LatLng {
    lat: 9.0765,
    lng: 7.3986,
};

/// Zoom level for the overview.
pub const DEFAULT_ZOOM: u8 = 9;

/// Zoom level when panned to a single station.
pub const FOCUS_ZOOM: u8 = 12;

/// A geographic position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn of(station: &Station) -> Self {
        Self {
            lat: station.latitude,
            lng: station.longitude,
        }
    }
}

/// One pin on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerView {
    pub name: String,
    pub details: String,
    pub position: LatLng,
    pub style: StyleToken,
    pub icon: String,
    pub active: bool,
}

impl MarkerView {
    /// Build the marker for a station.
    pub fn from_station(station: &Station, active: bool) -> Self {
        let style = resolve_marker_style(&station.kind);
        Self {
            name: station.name.clone(),
            details: station.details.clone(),
            position: LatLng::of(station),
            style,
            icon: style.icon_path(),
            active,
        }
    }
}

/// Info window content for the selected station.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoPanel {
    pub name: String,
    pub details: String,
    pub position: LatLng,
}

/// Everything the display layer needs to draw the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapViewModel {
    pub markers: Vec<MarkerView>,
    pub info: Option<InfoPanel>,
    pub center: LatLng,
    pub zoom: u8,
    pub not_found: Option<String>,
}

impl MapViewModel {
    /// Number of markers on the map.
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }
}

/// Receives a fresh view model whenever the session changes.
pub trait ViewSink {
    fn render(&mut self, view: &MapViewModel);
}

/// Sink that drops every update.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl ViewSink for NoopSink {
    fn render(&mut self, _view: &MapViewModel) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_from_station() {
        let station = Station::new("Idu", 9.0644, 7.3581, "major");
        let marker = MarkerView::from_station(&station, true);

        assert_eq!(marker.name, "Idu");
        assert_eq!(marker.style, StyleToken::Red);
        assert_eq!(marker.icon, "/static/red-pin.svg");
        assert_eq!(marker.position, LatLng { lat: 9.0644, lng: 7.3581 });
        assert!(marker.active);
    }

    #[test]
    fn marker_for_unknown_category() {
        let station = Station::new("Somewhere", 1.0, 2.0, "halt");
        let marker = MarkerView::from_station(&station, false);
        assert_eq!(marker.style, StyleToken::Blue);
    }
}
