//! Tiny-profile SVG writer.
//!
//! A single `polyline` element carries the trace with a fixed stroke
//! color. Coordinate precision is whatever the float formatter
//! produces; only Gerber and the drill list pin their precision.

use coilgen_core::Polyline;

const STROKE: &str = "rgb(10%,10%,16%)";

/// Renders the complete SVG document for a coil trace.
pub fn render(coil: &Polyline) -> String {
    let points = coil
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        concat!(
            "<?xml version=\"1.0\" encoding=\"utf-8\" ?>\n",
            "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.2\" baseProfile=\"tiny\">\n",
            "  <polyline fill=\"none\" stroke=\"{}\" points=\"{}\" />\n",
            "</svg>\n",
        ),
        STROKE, points
    )
}
