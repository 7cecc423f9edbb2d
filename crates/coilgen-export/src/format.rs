//! Export format selection and targets.

use crate::error::{ExportError, ExportResult};
use coilgen_core::Units;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// The fabrication file formats a coil trace can be written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// RS-274X photoplotter data (`.gbr`).
    Gerber,
    /// AutoCAD drawing exchange (`.dxf`).
    Dxf,
    /// Scalable vector graphics (`.svg`).
    Svg,
    /// Plain-text coordinate list (`.txt`).
    DrillList,
}

impl ExportFormat {
    /// All supported formats, in the order they are offered to users.
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Gerber,
        ExportFormat::Dxf,
        ExportFormat::Svg,
        ExportFormat::DrillList,
    ];

    /// Returns the display name of the format.
    pub fn name(&self) -> &'static str {
        match self {
            ExportFormat::Gerber => "Gerber",
            ExportFormat::Dxf => "DXF",
            ExportFormat::Svg => "SVG",
            ExportFormat::DrillList => "Drill List",
        }
    }

    /// File extension written for this format, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Gerber => "gbr",
            ExportFormat::Dxf => "dxf",
            ExportFormat::Svg => "svg",
            ExportFormat::DrillList => "txt",
        }
    }

    /// Resolves a file extension (without dot, any case) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "gbr" => Some(ExportFormat::Gerber),
            "dxf" => Some(ExportFormat::Dxf),
            "svg" => Some(ExportFormat::Svg),
            "txt" => Some(ExportFormat::DrillList),
            _ => None,
        }
    }

    /// Resolves an output path to a format by its extension.
    pub fn from_path(path: &Path) -> ExportResult<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| ExportError::UnsupportedFormat(path.display().to_string()))
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One export destination: where to write, in which format, and the
/// trace width that sizes the Gerber aperture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportTarget {
    pub format: ExportFormat,
    pub path: PathBuf,
    /// Trace width used for the Gerber aperture definition.
    pub trace_width: f64,
    /// Unit the coordinates are already expressed in; stamped into
    /// Gerber and DXF headers, never converted.
    pub units: Units,
}

impl ExportTarget {
    /// Creates a target with the legacy default unit (inches).
    pub fn new(format: ExportFormat, path: impl Into<PathBuf>, trace_width: f64) -> Self {
        Self {
            format,
            path: path.into(),
            trace_width,
            units: Units::default(),
        }
    }

    /// Creates a target, inferring the format from the path extension.
    pub fn for_path(path: impl Into<PathBuf>, trace_width: f64) -> ExportResult<Self> {
        let path = path.into();
        let format = ExportFormat::from_path(&path)?;
        Ok(Self::new(format, path, trace_width))
    }

    /// Replaces the declared coordinate unit.
    pub fn with_units(mut self, units: Units) -> Self {
        self.units = units;
        self
    }
}
