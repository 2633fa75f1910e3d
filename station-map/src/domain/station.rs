//! Station records and categories.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Category of a station.
///
/// The dataset stores the category as a free string. The three known values
/// get their own variants; anything else is kept verbatim in `Other` so that
/// a record survives a load/save cycle unchanged.
///
/// # Examples
///
/// ```
/// use station_map::domain::StationType;
///
/// assert_eq!(StationType::from("major"), StationType::Major);
/// assert_eq!(StationType::from("Major"), StationType::Other("Major".into()));
/// assert_eq!(StationType::Development.as_str(), "development");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StationType {
    Major,
    Minor,
    Development,
    Other(String),
}

impl StationType {
    /// Returns the category as it appears in the dataset.
    pub fn as_str(&self) -> &str {
        match self {
            StationType::Major => "major",
            StationType::Minor => "minor",
            StationType::Development => "development",
            StationType::Other(s) => s,
        }
    }
}

impl From<&str> for StationType {
    fn from(s: &str) -> Self {
        match s {
            "major" => StationType::Major,
            "minor" => StationType::Minor,
            "development" => StationType::Development,
            other => StationType::Other(other.to_string()),
        }
    }
}

impl From<String> for StationType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "major" | "minor" | "development" => StationType::from(s.as_str()),
            _ => StationType::Other(s),
        }
    }
}

impl From<StationType> for String {
    fn from(t: StationType) -> Self {
        match t {
            StationType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for StationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A railway station as stored in the dataset.
///
/// `name` doubles as the key for the update and delete paths. Uniqueness is
/// expected but not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "type")]
    pub kind: StationType,
    #[serde(default)]
    pub details: String,
}

impl Station {
    /// Create a station with empty details.
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        kind: impl Into<StationType>,
    ) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
            kind: kind.into(),
            details: String::new(),
        }
    }

    /// Set the details text.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = details.into();
        self
    }

    /// Check that the record is usable on a map.
    ///
    /// Stations loaded from the dataset are taken as-is; this is applied to
    /// records coming in through the write path.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::EmptyName);
        }
        validate_latitude(self.latitude)?;
        validate_longitude(self.longitude)?;
        Ok(())
    }

    /// Apply a partial update, overwriting only the fields the patch carries.
    pub fn apply(&mut self, patch: &StationPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(lat) = patch.latitude {
            self.latitude = lat;
        }
        if let Some(lng) = patch.longitude {
            self.longitude = lng;
        }
        if let Some(kind) = &patch.kind {
            self.kind = kind.clone();
        }
        if let Some(details) = &patch.details {
            self.details = details.clone();
        }
    }
}

/// A partial station used by the update path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StationPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<StationType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl StationPatch {
    /// Check the fields the patch carries.
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(name) = &self.name
            && name.trim().is_empty()
        {
            return Err(DomainError::EmptyName);
        }
        if let Some(lat) = self.latitude {
            validate_latitude(lat)?;
        }
        if let Some(lng) = self.longitude {
            validate_longitude(lng)?;
        }
        Ok(())
    }

    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == StationPatch::default()
    }
}

fn validate_latitude(lat: f64) -> Result<(), DomainError> {
    if lat.is_finite() && (-90.0..=90.0).contains(&lat) {
        Ok(())
    } else {
        Err(DomainError::InvalidLatitude(lat))
    }
}

fn validate_longitude(lng: f64) -> Result<(), DomainError> {
    if lng.is_finite() && (-180.0..=180.0).contains(&lng) {
        Ok(())
    } else {
        Err(DomainError::InvalidLongitude(lng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kaduna() -> Station {
        Station::new("Kaduna", 10.5105, 7.4165, "major").with_details("Rigasa terminal")
    }

    #[test]
    fn known_types_parse() {
        assert_eq!(StationType::from("major"), StationType::Major);
        assert_eq!(StationType::from("minor"), StationType::Minor);
        assert_eq!(StationType::from("development"), StationType::Development);
    }

    #[test]
    fn unknown_type_is_preserved() {
        let t = StationType::from("halt".to_string());
        assert_eq!(t, StationType::Other("halt".into()));
        assert_eq!(t.as_str(), "halt");
        assert_eq!(String::from(t), "halt");
    }

    #[test]
    fn type_matching_is_case_sensitive() {
        assert_ne!(StationType::from("MAJOR"), StationType::Major);
    }

    #[test]
    fn deserialize_dataset_record() {
        let json = r#"{
            "name": "Kubwa",
            "latitude": 9.1541,
            "longitude": 7.3222,
            "type": "minor",
            "details": "Abuja-Kaduna line"
        }"#;
        let station: Station = serde_json::from_str(json).unwrap();
        assert_eq!(station.name, "Kubwa");
        assert_eq!(station.kind, StationType::Minor);
        assert_eq!(station.details, "Abuja-Kaduna line");
    }

    #[test]
    fn serialize_uses_type_key() {
        let value = serde_json::to_value(kaduna()).unwrap();
        assert_eq!(value["type"], "major");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn missing_details_defaults_to_empty() {
        let json = r#"{"name":"Jere","latitude":9.5,"longitude":7.5,"type":"minor"}"#;
        let station: Station = serde_json::from_str(json).unwrap();
        assert_eq!(station.details, "");
    }

    #[test]
    fn validate_accepts_good_record() {
        assert!(kaduna().validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_name() {
        let station = Station::new("   ", 1.0, 1.0, "minor");
        assert!(matches!(station.validate(), Err(DomainError::EmptyName)));
    }

    #[test]
    fn validate_rejects_bad_coordinates() {
        let station = Station::new("X", 91.0, 1.0, "minor");
        assert!(matches!(
            station.validate(),
            Err(DomainError::InvalidLatitude(_))
        ));

        let station = Station::new("X", 1.0, f64::NAN, "minor");
        assert!(matches!(
            station.validate(),
            Err(DomainError::InvalidLongitude(_))
        ));
    }

    #[test]
    fn apply_patch_merges_present_fields() {
        let mut station = kaduna();
        let patch = StationPatch {
            details: Some("Renovated".into()),
            kind: Some(StationType::Development),
            ..Default::default()
        };
        station.apply(&patch);

        assert_eq!(station.name, "Kaduna");
        assert_eq!(station.latitude, 10.5105);
        assert_eq!(station.kind, StationType::Development);
        assert_eq!(station.details, "Renovated");
    }

    #[test]
    fn empty_patch() {
        assert!(StationPatch::default().is_empty());
        let patch = StationPatch {
            latitude: Some(1.0),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn patch_validation() {
        let patch = StationPatch {
            longitude: Some(200.0),
            ..Default::default()
        };
        assert!(patch.validate().is_err());

        let patch = StationPatch {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(matches!(patch.validate(), Err(DomainError::EmptyName)));
    }
}
