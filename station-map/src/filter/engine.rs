//! Text and category filtering over the station list.

use serde::Serialize;

use crate::domain::{Station, StationType};

/// Outcome of a filter operation.
///
/// `items` keeps the order of the input list. `focus` names the station the
/// view should centre on, if any. `matched` is false only when the filter
/// left nothing visible.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterResult {
    pub items: Vec<Station>,
    pub focus: Option<String>,
    pub matched: bool,
}

impl FilterResult {
    /// The focused station, looked up in `items`.
    pub fn focus_station(&self) -> Option<&Station> {
        let name = self.focus.as_deref()?;
        self.items.iter().find(|s| s.name == name)
    }

    /// Number of visible stations.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is visible.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Filter stations whose name contains `query`, ignoring case.
///
/// The first match in input order becomes the focus. An empty query matches
/// every station.
pub fn filter_by_text(stations: &[Station], query: &str) -> FilterResult {
    let needle = query.to_lowercase();
    let items: Vec<Station> = stations
        .iter()
        .filter(|s| s.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    let focus = items.first().map(|s| s.name.clone());
    let matched = !items.is_empty();

    FilterResult {
        items,
        focus,
        matched,
    }
}

/// Filter stations whose category equals `kind` exactly.
///
/// Category browsing never selects a station, so `focus` is always `None`.
pub fn filter_by_type(stations: &[Station], kind: &StationType) -> FilterResult {
    let items: Vec<Station> = stations
        .iter()
        .filter(|s| &s.kind == kind)
        .cloned()
        .collect();

    let matched = !items.is_empty();

    FilterResult {
        items,
        focus: None,
        matched,
    }
}

/// The unfiltered view.
pub fn reset(stations: &[Station]) -> FilterResult {
    FilterResult {
        items: stations.to_vec(),
        focus: None,
        matched: true,
    }
}
