//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::dataset::DatasetSource;

/// Default location of the demo cache file.
const DEFAULT_CACHE_PATH: &str = "station_cache.json";

/// Default directory for marker icons and stylesheets.
const DEFAULT_STATIC_DIR: &str = "static";

/// Errors from reading the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Listen address is not `host:port`
    #[error("invalid {var}: {value:?} is not a socket address")]
    InvalidAddr { var: &'static str, value: String },
}

/// Settings handed to the map widget in the browser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapWidgetConfig {
    /// API key for the map widget script
    pub api_key: Option<String>,
    /// Map style identifier
    pub map_id: Option<String>,
}

/// Configuration for the station map server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address to listen on
    pub addr: SocketAddr,
    /// Where to load the station dataset from
    pub dataset: DatasetSource,
    /// File backing the demo cache
    pub cache_path: PathBuf,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Map widget settings
    pub widget: MapWidgetConfig,
}

impl AppConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, falling back to defaults for
    /// unset or empty variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = Self::default();

        if let Some(addr) = var("STATION_MAP_ADDR") {
            config.addr = addr.parse().map_err(|_| ConfigError::InvalidAddr {
                var: "STATION_MAP_ADDR",
                value: addr.clone(),
            })?;
        }
        if let Some(data) = var("STATION_DATA") {
            config.dataset = DatasetSource::parse(&data);
        }
        if let Some(path) = var("STATION_CACHE_PATH") {
            config.cache_path = PathBuf::from(path);
        }
        if let Some(dir) = var("STATION_STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }
        config.widget.api_key = var("MAPS_API_KEY");
        config.widget.map_id = var("MAP_ID");

        Ok(config)
    }

    /// Set the dataset source.
    pub fn with_dataset(mut self, dataset: DatasetSource) -> Self {
        self.dataset = dataset;
        self
    }

    /// Set the cache file path.
    pub fn with_cache_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cache_path = path.into();
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            dataset: DatasetSource::Bundled,
            cache_path: PathBuf::from(DEFAULT_CACHE_PATH),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            widget: MapWidgetConfig::default(),
        }
    }
}
