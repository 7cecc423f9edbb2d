//! Length unit declaration.
//!
//! Coil coordinates are generated and serialized in a single unit; this
//! enum only declares which one, so exporters can stamp the matching
//! directive into file headers. No conversion is applied anywhere in
//! the generation or export path; display conversion is the caller's
//! concern.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The length unit coil coordinates are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Inches (the legacy default for coil designs)
    Inches,
    /// Millimeters
    Millimeters,
}

impl Default for Units {
    fn default() -> Self {
        Self::Inches
    }
}

impl Units {
    /// Short unit label ("in" or "mm").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Inches => "in",
            Self::Millimeters => "mm",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inches => write!(f, "Inches"),
            Self::Millimeters => write!(f, "Millimeters"),
        }
    }
}

impl FromStr for Units {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "in" | "inch" | "inches" | "imperial" => Ok(Self::Inches),
            "mm" | "millimeter" | "millimeters" | "metric" => Ok(Self::Millimeters),
            _ => Err(format!("Unknown unit: {}", s)),
        }
    }
}
