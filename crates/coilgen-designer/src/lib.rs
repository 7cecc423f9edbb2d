//! # Coilgen Designer
//!
//! Parametric generation of PCB inductor-coil traces.
//!
//! ## Core Components
//!
//! - **Coil model**: [`CoilParameters`] (turn count, trace width, spacing,
//!   diameters) and the [`CoilShape`] selector
//! - **Validation**: [`CoilParameters::validate`] rejects out-of-range
//!   input with a structured [`ParameterError`] naming the field
//! - **Generator**: [`generate`] turns validated parameters into an
//!   ordered [`coilgen_core::Polyline`] approximating the coil
//!
//! Generation is pure and deterministic: no I/O, no shared state, and
//! identical parameters always produce identical point sequences. The
//! caller renders the sequence for preview or hands it to
//! `coilgen-export` for serialization.

pub mod coil;
pub mod error;
pub mod generator;

pub use coil::{CoilParameters, CoilShape};
pub use error::{ParameterError, ParameterResult};
pub use generator::{generate, SPIRAL_SUBDIVISIONS};
