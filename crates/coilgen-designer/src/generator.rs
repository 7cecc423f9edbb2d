//! Coil trace generation.
//!
//! Turns validated [`CoilParameters`] into an ordered point sequence
//! approximating the requested coil. Pure functions: no I/O, no side
//! effects, identical inputs yield bit-identical output.

use crate::coil::{CoilParameters, CoilShape};
use crate::error::ParameterResult;
use coilgen_core::{Point, Polyline};
use std::f64::consts::PI;
use tracing::debug;

/// Angular subdivisions per spiral turn.
pub const SPIRAL_SUBDIVISIONS: usize = 100;

/// Generates the trace for the given parameters.
///
/// Validates every invariant first; no geometry is computed for
/// rejected input. The returned sequence is centered on the origin and
/// expressed in the same unit as the input lengths.
pub fn generate(params: &CoilParameters) -> ParameterResult<Polyline> {
    params.validate()?;
    debug!(
        "generating {} coil: turns={} width={} spacing={}",
        params.shape, params.turns, params.trace_width, params.spacing
    );

    let points = match params.shape {
        CoilShape::Spiral => spiral_points(params),
        CoilShape::Square => square_points(params),
    };

    debug!("generated coil trace with {} points", points.len());
    Ok(Polyline::from_points(points))
}

/// Archimedean spiral approximation.
///
/// Each turn is discretized into [`SPIRAL_SUBDIVISIONS`] samples. The
/// radius interpolates linearly from `inner_diameter / 2` at the first
/// sample to `outer_diameter / 2` at the last; the angle advances by a
/// fixed step per sample and is left unwrapped, so both radius and
/// angle grow monotonically with sample index.
fn spiral_points(params: &CoilParameters) -> Vec<Point> {
    let samples = params.turns as usize * SPIRAL_SUBDIVISIONS;
    let start_radius = params.inner_diameter / 2.0;
    let radius_span = params.outer_diameter / 2.0 - start_radius;
    let angle_step = 2.0 * PI / SPIRAL_SUBDIVISIONS as f64;
    let last = (samples - 1) as f64;

    let mut points = Vec::with_capacity(samples);
    for i in 0..samples {
        let radius = start_radius + radius_span * i as f64 / last;
        let angle = angle_step * i as f64;
        points.push(Point::new(radius * angle.cos(), radius * angle.sin()));
    }
    points
}

/// Rectangular spiral: four corner points per turn.
///
/// The half-side of turn `k` is `(k + 1) * pitch`, where pitch is
/// trace width plus spacing, so each turn steps uniformly outward.
/// When `close_path` is set the first point is repeated at the end.
fn square_points(params: &CoilParameters) -> Vec<Point> {
    let turns = params.turns as usize;
    let pitch = params.pitch();

    let mut points = Vec::with_capacity(4 * turns + 1);
    for turn in 0..turns {
        let half = pitch * (turn + 1) as f64;
        points.push(Point::new(half, half));
        points.push(Point::new(-half, half));
        points.push(Point::new(-half, -half));
        points.push(Point::new(half, -half));
    }
    if params.close_path {
        if let Some(first) = points.first().copied() {
            points.push(first);
        }
    }
    points
}
