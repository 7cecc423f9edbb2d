//! Coil parameter model and validation.

use crate::error::{ParameterError, ParameterResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The trace layout a coil is generated with.
///
/// A closed set: there are exactly two layouts and no plugin
/// extensibility, so dispatch is a plain enum match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoilShape {
    /// Archimedean spiral sampled at a fixed number of subdivisions
    /// per turn.
    Spiral,
    /// Rectangular spiral visiting four corners per turn.
    Square,
}

impl CoilShape {
    /// Returns the name of the shape.
    pub fn name(&self) -> &'static str {
        match self {
            CoilShape::Spiral => "Spiral",
            CoilShape::Square => "Square",
        }
    }
}

impl Default for CoilShape {
    fn default() -> Self {
        Self::Spiral
    }
}

impl fmt::Display for CoilShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CoilShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "spiral" => Ok(Self::Spiral),
            "square" | "rect" | "rectangular" => Ok(Self::Square),
            _ => Err(format!("Unknown coil shape: {}", s)),
        }
    }
}

/// Parameters for one coil generation request.
///
/// Constructed fresh per request; nothing outlives a single
/// generate-then-consume cycle. All lengths share one unit (inches by
/// legacy convention); the generator never converts.
///
/// `turns` is signed so that raw out-of-range input from the boundary
/// layer (e.g. `-1`) reaches [`CoilParameters::validate`] and comes
/// back as a structured error instead of a conversion panic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoilParameters {
    /// Number of turns (at least 1).
    pub turns: i32,
    /// Copper trace width.
    pub trace_width: f64,
    /// Gap between adjacent turns. Zero is legal and collapses
    /// turn-to-turn growth; widths overlapping the gap are not checked.
    pub spacing: f64,
    /// Innermost diameter of the spiral layout.
    pub inner_diameter: f64,
    /// Outermost diameter of the spiral layout.
    pub outer_diameter: f64,
    /// Trace layout.
    pub shape: CoilShape,
    /// Repeat the first point at the end of a square trace so the last
    /// turn closes into a visible rectangle.
    pub close_path: bool,
}

impl Default for CoilParameters {
    fn default() -> Self {
        Self {
            turns: 10,
            trace_width: 1.0,
            spacing: 0.2,
            inner_diameter: 2.0,
            outer_diameter: 10.0,
            shape: CoilShape::Spiral,
            close_path: false,
        }
    }
}

impl CoilParameters {
    /// Checks every parameter invariant, reporting the first violated
    /// field. Runs before any geometry is computed.
    pub fn validate(&self) -> ParameterResult<()> {
        if self.turns < 1 {
            return Err(ParameterError::invalid(
                "turns",
                format!("must be at least 1, got {}", self.turns),
            ));
        }
        if !self.trace_width.is_finite() || self.trace_width <= 0.0 {
            return Err(ParameterError::invalid(
                "trace_width",
                format!("must be positive, got {}", self.trace_width),
            ));
        }
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(ParameterError::invalid(
                "spacing",
                format!("must not be negative, got {}", self.spacing),
            ));
        }
        // The diameter pair only drives the spiral layout; the square
        // layout grows from trace pitch alone.
        if self.shape == CoilShape::Spiral {
            if !self.inner_diameter.is_finite() || self.inner_diameter <= 0.0 {
                return Err(ParameterError::invalid(
                    "inner_diameter",
                    format!("must be positive, got {}", self.inner_diameter),
                ));
            }
            if !self.outer_diameter.is_finite() {
                return Err(ParameterError::invalid(
                    "outer_diameter",
                    format!("must be finite, got {}", self.outer_diameter),
                ));
            }
            if self.outer_diameter <= self.inner_diameter {
                return Err(ParameterError::Incompatible(format!(
                    "outer_diameter ({}) must exceed inner_diameter ({})",
                    self.outer_diameter, self.inner_diameter
                )));
            }
        }
        Ok(())
    }

    /// Center-to-center distance between adjacent turns.
    pub fn pitch(&self) -> f64 {
        self.trace_width + self.spacing
    }

    /// Default file stem for exports of this coil, e.g.
    /// `coil_10turns_1width_0.2spacing`.
    pub fn file_stem(&self) -> String {
        format!(
            "coil_{}turns_{}width_{}spacing",
            self.turns, self.trace_width, self.spacing
        )
    }
}
