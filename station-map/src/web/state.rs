//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::MapWidgetConfig;
use crate::dataset::DatasetError;
use crate::domain::Station;
use crate::store::StationStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Station list loaded at startup; read-only for the life of the process
    pub stations: Arc<Vec<Station>>,

    /// Message shown on the map page when the dataset could not be loaded
    pub load_error: Option<Arc<str>>,

    /// Demo cache, written by the admin endpoints only
    pub store: Arc<dyn StationStore>,

    /// Map widget settings passed to the browser
    pub widget: Arc<MapWidgetConfig>,

    /// Serializes read-modify-write cycles on the store
    pub write_lock: Arc<Mutex<()>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        stations: Vec<Station>,
        store: impl StationStore + 'static,
        widget: MapWidgetConfig,
    ) -> Self {
        Self {
            stations: Arc::new(stations),
            load_error: None,
            store: Arc::new(store),
            widget: Arc::new(widget),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Create the state from the outcome of the dataset load.
    ///
    /// A failed load leaves the station list empty and keeps the error for
    /// display; the server still starts.
    pub fn from_load(
        loaded: Result<Vec<Station>, DatasetError>,
        store: impl StationStore + 'static,
        widget: MapWidgetConfig,
    ) -> Self {
        match loaded {
            Ok(stations) => Self::new(stations, store, widget),
            Err(e) => Self {
                load_error: Some(format!("Error fetching stations: {e}").into()),
                ..Self::new(Vec::new(), store, widget)
            },
        }
    }
}
