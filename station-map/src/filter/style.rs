//! Marker appearance per station category.

use std::fmt;

use serde::Serialize;

use crate::domain::StationType;

/// Abstract marker colour handed to the display layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleToken {
    Red,
    Blue,
    Pink,
}

impl StyleToken {
    /// The token's name, e.g. `"red"`.
    pub fn as_str(self) -> &'static str {
        match self {
            StyleToken::Red => "red",
            StyleToken::Blue => "blue",
            StyleToken::Pink => "pink",
        }
    }

    /// Path of the pin image served under `/static`.
    pub fn icon_path(self) -> String {
        format!("/static/{}-pin.svg", self.as_str())
    }
}

impl fmt::Display for StyleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the marker style for a category.
///
/// Unknown categories get the default blue pin.
pub fn resolve_marker_style(kind: &StationType) -> StyleToken {
    match kind {
        StationType::Major => StyleToken::Red,
        StationType::Minor => StyleToken::Blue,
        StationType::Development => StyleToken::Pink,
        StationType::Other(_) => StyleToken::Blue,
    }
}
