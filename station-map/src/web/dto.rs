//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Station, StationType};
use crate::filter::{FilterResult, StyleToken, resolve_marker_style};

/// Query parameters of the map page.
#[derive(Debug, Default, Deserialize)]
pub struct MapPageRequest {
    /// Station name search; takes precedence over `type`
    pub q: Option<String>,

    /// Category to show
    #[serde(rename = "type")]
    pub kind: Option<String>,

    /// Station whose info window should be open
    pub selected: Option<String>,
}

/// Query parameters of the text filter endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct StationSearchRequest {
    /// Search text; missing means empty
    #[serde(default)]
    pub q: String,
}

/// A station in filter results.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub details: String,
    /// Marker colour
    pub style: StyleToken,
}

impl StationResult {
    /// Create from a domain Station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            name: station.name.clone(),
            latitude: station.latitude,
            longitude: station.longitude,
            kind: station.kind.to_string(),
            details: station.details.clone(),
            style: resolve_marker_style(&station.kind),
        }
    }
}

/// Response for every filter endpoint.
#[derive(Debug, Serialize)]
pub struct FilterResponse {
    /// Visible stations, in dataset order
    pub stations: Vec<StationResult>,

    /// Station to pan to
    pub focus: Option<String>,

    /// False when nothing matched
    pub matched: bool,
}

impl FilterResponse {
    /// Create from a filter result.
    pub fn from_result(result: &FilterResult) -> Self {
        Self {
            stations: result.items.iter().map(StationResult::from_station).collect(),
            focus: result.focus.clone(),
            matched: result.matched,
        }
    }
}

/// Response for the marker style endpoint.
#[derive(Debug, Serialize)]
pub struct StyleResponse {
    #[serde(rename = "type")]
    pub kind: String,
    pub style: StyleToken,
    pub icon: String,
}

impl StyleResponse {
    /// Resolve the style for a category.
    pub fn for_type(kind: &StationType) -> Self {
        let style = resolve_marker_style(kind);
        Self {
            kind: kind.to_string(),
            style,
            icon: style.icon_path(),
        }
    }
}

/// Response carrying the cached copy of the dataset.
#[derive(Debug, Serialize)]
pub struct CacheResponse {
    pub stations: Vec<Station>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::filter_by_text;

    #[test]
    fn filter_response_carries_style() {
        let stations = vec![
            Station::new("Idu", 9.06, 7.36, "major"),
            Station::new("Kano", 12.0, 8.59, "development"),
        ];
        let response = FilterResponse::from_result(&filter_by_text(&stations, "an"));

        assert_eq!(response.stations.len(), 1);
        assert_eq!(response.stations[0].name, "Kano");
        assert_eq!(response.stations[0].style, StyleToken::Pink);
        assert_eq!(response.focus.as_deref(), Some("Kano"));
        assert!(response.matched);
    }

    #[test]
    fn filter_response_json_shape() {
        let stations = vec![Station::new("Idu", 9.06, 7.36, "major")];
        let response = FilterResponse::from_result(&filter_by_text(&stations, "idu"));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["stations"][0]["type"], "major");
        assert_eq!(json["stations"][0]["style"], "red");
        assert_eq!(json["focus"], "Idu");
        assert_eq!(json["matched"], true);
    }

    #[test]
    fn map_page_request_parses_type_key() {
        let req: MapPageRequest =
            serde_json::from_str(r#"{"type":"minor","selected":"Kubwa"}"#).unwrap();
        assert_eq!(req.kind.as_deref(), Some("minor"));
        assert_eq!(req.selected.as_deref(), Some("Kubwa"));
        assert!(req.q.is_none());
    }

    #[test]
    fn style_response() {
        let response = StyleResponse::for_type(&StationType::from("siding"));
        assert_eq!(response.kind, "siding");
        assert_eq!(response.style, StyleToken::Blue);
        assert_eq!(response.icon, "/static/blue-pin.svg");
    }
}
