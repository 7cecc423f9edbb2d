//! # Coilgen Export
//!
//! Serializes a generated coil trace into board-manufacturing files.
//!
//! ## Supported formats
//!
//! - **Gerber** (`.gbr`): minimal RS-274X dialect with a fixed 2.5
//!   format header, one circular aperture sized to the trace width,
//!   and one draw command per point
//! - **DXF** (`.dxf`): minimal R2010 document with a single
//!   `LWPOLYLINE` entity
//! - **SVG** (`.svg`): tiny-profile document with a single `polyline`
//! - **Drill list** (`.txt`): one `x, y` pair per line, 4-decimal fixed
//!
//! Every writer renders the complete document into memory first and
//! writes it in a single call, so a failure can never leave a partially
//! written file behind. Coordinates pass through unchanged; the
//! [`coilgen_core::Units`] declaration only selects the unit directives
//! stamped into Gerber and DXF headers.

pub mod drill;
pub mod dxf;
pub mod error;
pub mod format;
pub mod gerber;
pub mod svg;
pub mod writer;

pub use error::{ExportError, ExportResult};
pub use format::{ExportFormat, ExportTarget};
pub use writer::{export, export_all, export_to_string};
