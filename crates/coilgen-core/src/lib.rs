//! # Coilgen Core
//!
//! Core geometry types and unit handling for Coilgen.
//! Provides the data carried between the coil generator and the
//! fabrication-file exporters: planar points, the ordered point
//! sequence that approximates a coil trace, and the unit declaration
//! stamped into output headers.

pub mod geometry;
pub mod units;

pub use geometry::{Bounds, Point, Polyline};
pub use units::Units;
