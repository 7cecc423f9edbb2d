//! Plain-text coordinate list writer.
//!
//! One point per line, X and Y separated by a comma, both with exactly
//! four decimal digits. The fixed precision is a compatibility contract
//! with the drill tooling that consumes these lists.

use coilgen_core::Polyline;

/// Renders the coordinate list for a coil trace.
pub fn render(coil: &Polyline) -> String {
    let mut out = String::with_capacity(20 * coil.len());
    for p in coil.iter() {
        out.push_str(&format!("{:.4}, {:.4}\n", p.x, p.y));
    }
    out
}
