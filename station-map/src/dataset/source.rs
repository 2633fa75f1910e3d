//! Where the station dataset comes from.

use std::fmt;
use std::path::PathBuf;

/// The dataset compiled into the binary.
pub(super) const BUNDLED_DATASET: &str = include_str!("../../data/rail-stations.json");

/// Location of the station dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DatasetSource {
    /// The dataset shipped with the binary.
    #[default]
    Bundled,
    /// A JSON file on disk.
    File(PathBuf),
    /// A JSON document served over HTTP.
    Url(String),
}

impl DatasetSource {
    /// Interpret a configuration value.
    ///
    /// `http://` and `https://` prefixes select a URL, an empty value or
    /// `bundled` selects the built-in dataset, anything else is a file path.
    ///
    /// # Examples
    ///
    /// ```
    /// use station_map::dataset::DatasetSource;
    ///
    /// assert_eq!(DatasetSource::parse(""), DatasetSource::Bundled);
    /// assert_eq!(
    ///     DatasetSource::parse("https://example.org/stations.json"),
    ///     DatasetSource::Url("https://example.org/stations.json".into())
    /// );
    /// ```
    pub fn parse(spec: &str) -> Self {
        let spec = spec.trim();
        if spec.is_empty() || spec.eq_ignore_ascii_case("bundled") {
            DatasetSource::Bundled
        } else if spec.starts_with("http://") || spec.starts_with("https://") {
            DatasetSource::Url(spec.to_string())
        } else {
            DatasetSource::File(PathBuf::from(spec))
        }
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::Bundled => f.write_str("bundled dataset"),
            DatasetSource::File(path) => write!(f, "file {}", path.display()),
            DatasetSource::Url(url) => write!(f, "url {url}"),
        }
    }
}
