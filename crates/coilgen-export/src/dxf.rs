//! Minimal DXF writer.
//!
//! Produces an R2010-compatible document whose ENTITIES section holds a
//! single `LWPOLYLINE` carrying the trace vertices in order. Only the
//! group codes downstream importers read are emitted: header variables
//! for version and units, entity layer, vertex count, the open/closed
//! flag, and one 10/20 coordinate pair per vertex.

use coilgen_core::{Polyline, Units};

// $INSUNITS drawing-unit codes: 1 = inches, 4 = millimeters.
fn insunits(units: Units) -> u32 {
    match units {
        Units::Inches => 1,
        Units::Millimeters => 4,
    }
}

fn tag(out: &mut String, code: i32, value: &str) {
    out.push_str(&format!("{}\n{}\n", code, value));
}

/// Renders the complete DXF document for a coil trace.
pub fn render(coil: &Polyline, units: Units) -> String {
    let mut out = String::with_capacity(24 * coil.len() + 256);

    tag(&mut out, 0, "SECTION");
    tag(&mut out, 2, "HEADER");
    tag(&mut out, 9, "$ACADVER");
    tag(&mut out, 1, "AC1024");
    tag(&mut out, 9, "$INSUNITS");
    tag(&mut out, 70, &insunits(units).to_string());
    tag(&mut out, 0, "ENDSEC");

    tag(&mut out, 0, "SECTION");
    tag(&mut out, 2, "ENTITIES");
    tag(&mut out, 0, "LWPOLYLINE");
    tag(&mut out, 8, "0");
    tag(&mut out, 90, &coil.len().to_string());
    tag(&mut out, 70, "0");
    for p in coil.iter() {
        tag(&mut out, 10, &p.x.to_string());
        tag(&mut out, 20, &p.y.to_string());
    }
    tag(&mut out, 0, "ENDSEC");
    tag(&mut out, 0, "EOF");

    out
}
