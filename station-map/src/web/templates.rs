//! Askama templates for the web frontend.

use askama::Template;

use crate::config::MapWidgetConfig;
use crate::domain::{Station, StationType};
use crate::filter::resolve_marker_style;
use crate::map::{InfoPanel, MapSession, MapViewModel, ViewSink};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Map page with search box, category filters and the map widget.
#[derive(Template)]
#[template(path = "map.html")]
pub struct MapTemplate {
    pub query: String,
    pub type_filters: Vec<TypeFilterView>,
    pub rows: Vec<StationRowView>,
    pub info: Option<InfoPanel>,
    pub not_found: Option<String>,
    pub load_error: Option<String>,
    /// Serialized [`MapViewModel`] for the widget script
    pub view_json: String,
    pub api_key: Option<String>,
    pub map_id: String,
}

impl MapTemplate {
    /// Build the page from the session state.
    pub fn from_session<S: ViewSink>(
        session: &MapSession<S>,
        query: &str,
        selected_type: Option<&str>,
        widget: &MapWidgetConfig,
    ) -> Result<Self, serde_json::Error> {
        let view = session.view();
        let active = session.active_marker();

        let rows = session
            .result()
            .items
            .iter()
            .map(|s| StationRowView::from_station(s, Some(s.name.as_str()) == active))
            .collect();

        Ok(Self {
            query: query.to_string(),
            type_filters: TypeFilterView::all(selected_type),
            rows,
            info: view.info.clone(),
            not_found: view.not_found.clone(),
            load_error: None,
            view_json: script_json(&view)?,
            api_key: widget.api_key.clone(),
            map_id: widget.map_id.clone().unwrap_or_default(),
        })
    }

    /// Show a dataset load failure above the map.
    pub fn with_load_error(mut self, message: Option<&str>) -> Self {
        self.load_error = message.map(str::to_string);
        self
    }
}

/// Admin page listing the cached copy of the dataset.
#[derive(Template)]
#[template(path = "admin.html")]
pub struct AdminTemplate {
    pub rows: Vec<StationRowView>,
}

impl AdminTemplate {
    pub fn new(stations: &[Station]) -> Self {
        Self {
            rows: stations
                .iter()
                .map(|s| StationRowView::from_station(s, false))
                .collect(),
        }
    }
}

/// Page shown for unknown paths.
#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub path: String,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// One entry in the station list.
#[derive(Debug, Clone)]
pub struct StationRowView {
    pub name: String,
    pub kind: String,
    pub details: String,
    pub latitude: f64,
    pub longitude: f64,
    pub icon: String,
    pub active: bool,
}

impl StationRowView {
    /// Create from a domain Station.
    pub fn from_station(station: &Station, active: bool) -> Self {
        Self {
            name: station.name.clone(),
            kind: station.kind.to_string(),
            details: station.details.clone(),
            latitude: station.latitude,
            longitude: station.longitude,
            icon: resolve_marker_style(&station.kind).icon_path(),
            active,
        }
    }
}

/// A category filter button.
#[derive(Debug, Clone)]
pub struct TypeFilterView {
    pub value: String,
    pub label: String,
    pub icon: String,
    pub active: bool,
}

impl TypeFilterView {
    /// Buttons for the three known categories.
    pub fn all(selected: Option<&str>) -> Vec<Self> {
        [
            (StationType::Major, "Major"),
            (StationType::Minor, "Minor"),
            (StationType::Development, "Under development"),
        ]
        .into_iter()
        .map(|(kind, label)| Self {
            value: kind.to_string(),
            label: label.to_string(),
            icon: resolve_marker_style(&kind).icon_path(),
            active: selected == Some(kind.as_str()),
        })
        .collect()
    }
}

/// Serialize the view model for embedding in a `<script>` block.
fn script_json(view: &MapViewModel) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(view)?.replace("</", "<\\/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn stations() -> Arc<Vec<Station>> {
        Arc::new(vec![
            Station::new("Idu Station", 9.0644, 7.3581, "major").with_details("Abuja terminus"),
            Station::new("Kubwa Station", 9.1541, 7.3222, "minor"),
            Station::new("Kano Station", 12.0022, 8.592, "development")
                .with_details("</script><b>planned</b>"),
        ])
    }

    #[test]
    fn type_filters_mark_selection() {
        let filters = TypeFilterView::all(Some("minor"));
        assert_eq!(filters.len(), 3);
        assert!(!filters[0].active);
        assert!(filters[1].active);
        assert_eq!(filters[2].value, "development");
        assert_eq!(filters[2].icon, "/static/pink-pin.svg");
    }

    #[test]
    fn script_json_escapes_closing_tags() {
        let mut session = MapSession::new(stations());
        session.search("kano");
        let json = script_json(&session.view()).unwrap();
        assert!(!json.contains("</script>"));
    }

    #[test]
    fn map_page_renders_visible_stations() {
        let mut session = MapSession::new(stations());
        session.filter_type(&StationType::Major);

        let page = MapTemplate::from_session(
            &session,
            "",
            Some("major"),
            &MapWidgetConfig::default(),
        )
        .unwrap();
        let html = page.render().unwrap();

        assert!(html.contains("Idu Station"));
        assert!(!html.contains("Kubwa Station"));
    }

    #[test]
    fn map_page_shows_not_found_message() {
        let mut session = MapSession::new(stations());
        session.search("Lagos");

        let page =
            MapTemplate::from_session(&session, "Lagos", None, &MapWidgetConfig::default())
                .unwrap();
        let html = page.render().unwrap();

        assert!(html.contains("No station found matching"));
    }

    #[test]
    fn map_page_shows_info_panel() {
        let mut session = MapSession::new(stations());
        session.search("idu");

        let page = MapTemplate::from_session(&session, "idu", None, &MapWidgetConfig::default())
            .unwrap();
        assert_eq!(
            page.info.as_ref().map(|i| i.details.as_str()),
            Some("Abuja terminus")
        );
        assert!(page.render().unwrap().contains("Abuja terminus"));
    }

    #[test]
    fn map_page_shows_load_error() {
        let session = MapSession::new(Arc::new(Vec::new()));
        let html = MapTemplate::from_session(&session, "", None, &MapWidgetConfig::default())
            .unwrap()
            .with_load_error(Some("Error fetching stations: offline"))
            .render()
            .unwrap();

        assert!(html.contains("Error fetching stations: offline"));
        assert!(!html.contains("station-name"));
    }

    #[test]
    fn admin_page_lists_stations() {
        let page = AdminTemplate::new(&stations());
        let html = page.render().unwrap();
        assert!(html.contains("Kubwa Station"));
        assert_eq!(page.rows.len(), 3);
    }

    #[test]
    fn not_found_page() {
        let html = NotFoundTemplate {
            path: "/nowhere".into(),
        }
        .render()
        .unwrap();
        assert!(html.contains("nowhere"));
    }
}
