//! Minimal RS-274X (Gerber) writer.
//!
//! Emits the fixed header the downstream tooling expects: a 2.5
//! coordinate format statement, a unit directive, and one circular
//! aperture sized to the trace width, followed by one draw command per
//! point and the end-of-program marker. Coordinates carry exactly four
//! decimal digits; that precision is a compatibility contract with the
//! consuming PCB tools.

use coilgen_core::{Polyline, Units};

fn unit_directive(units: Units) -> &'static str {
    match units {
        Units::Inches => "%MOIN*%",
        Units::Millimeters => "%MOMM*%",
    }
}

/// Renders the complete Gerber document for a coil trace.
pub fn render(coil: &Polyline, trace_width: f64, units: Units) -> String {
    // Header lines + one draw per point + end-of-program.
    let mut out = String::with_capacity(32 * coil.len() + 128);
    out.push_str("%FSLAX25Y25*%\n");
    out.push_str("G04 Coilgen RS-274X export*\n");
    out.push_str(unit_directive(units));
    out.push('\n');
    out.push_str(&format!("%ADD10C,{:.4}*%\n", trace_width));
    for p in coil.iter() {
        out.push_str(&format!("X{:.4}Y{:.4}D01*\n", p.x, p.y));
    }
    out.push_str("M02*\n");
    out
}
