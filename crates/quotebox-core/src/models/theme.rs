//! Theme preference model

use std::fmt;

use serde::{Deserialize, Serialize};

/// Theme mode options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl ThemeMode {
    /// Literal value written to the durable store
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Interpret a stored theme value.
    ///
    /// Only the exact literal `"dark"` selects the dark theme; anything else,
    /// including a missing value, falls back to light.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        if value == Some("dark") {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Check if the theme is dark
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The opposite theme
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
