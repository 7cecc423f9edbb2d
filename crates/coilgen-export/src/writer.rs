//! Export entry points.
//!
//! Dispatches a point sequence to the per-format writers. Rendering
//! happens entirely in memory; the destination file is only touched
//! once a complete document exists, so no failure mode leaves a
//! partially written file.

use crate::error::{ExportError, ExportResult};
use crate::format::{ExportFormat, ExportTarget};
use crate::{drill, dxf, gerber, svg};
use coilgen_core::{Polyline, Units};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Renders the document for the target without touching the
/// filesystem. Used by previews and tests.
pub fn export_to_string(coil: &Polyline, target: &ExportTarget) -> ExportResult<String> {
    if coil.is_empty() {
        return Err(ExportError::EmptyTrace);
    }
    let content = match target.format {
        ExportFormat::Gerber => gerber::render(coil, target.trace_width, target.units),
        ExportFormat::Dxf => dxf::render(coil, target.units),
        ExportFormat::Svg => svg::render(coil),
        ExportFormat::DrillList => drill::render(coil),
    };
    Ok(content)
}

/// Writes exactly one file at `target.path`, overwriting any previous
/// content and creating missing parent directories.
pub fn export(coil: &Polyline, target: &ExportTarget) -> ExportResult<()> {
    debug!(
        "exporting {} points as {} to {}",
        coil.len(),
        target.format,
        target.path.display()
    );
    let content = export_to_string(coil, target)?;

    if let Some(parent) = target.path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&target.path, content)?;

    info!("wrote {} file: {}", target.format, target.path.display());
    Ok(())
}

/// Writes every supported format for one trace into `dir`, named
/// `<stem>.<ext>`. Returns the paths written, in format order.
///
/// Each writer is a pure function of the trace, so the formats are
/// independent; the files are small and local, and the writes run
/// sequentially on the calling thread.
pub fn export_all(
    coil: &Polyline,
    dir: &Path,
    stem: &str,
    trace_width: f64,
    units: Units,
) -> ExportResult<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(ExportFormat::ALL.len());
    for format in ExportFormat::ALL {
        let path = dir.join(format!("{}.{}", stem, format.extension()));
        let target = ExportTarget::new(format, path.clone(), trace_width).with_units(units);
        export(coil, &target)?;
        written.push(path);
    }
    Ok(written)
}
