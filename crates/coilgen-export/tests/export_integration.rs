// Integration tests: generate a coil and write it through every
// fabrication format on a real filesystem.

use coilgen_core::Units;
use coilgen_designer::{generate, CoilParameters, CoilShape};
use coilgen_export::{export, export_all, ExportFormat, ExportTarget};
use std::fs;
use tempfile::TempDir;

fn spiral(turns: i32) -> CoilParameters {
    CoilParameters {
        turns,
        trace_width: 1.0,
        spacing: 0.2,
        inner_diameter: 2.0,
        outer_diameter: 10.0,
        shape: CoilShape::Spiral,
        close_path: false,
    }
}

#[test]
fn test_drill_list_round_trip() -> anyhow::Result<()> {
    let coil = generate(&spiral(5))?;
    let dir = TempDir::new()?;
    let path = dir.path().join("coil.txt");
    let target = ExportTarget::new(ExportFormat::DrillList, &path, 1.0);

    export(&coil, &target)?;

    let content = fs::read_to_string(&path)?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), coil.len());

    for (line, point) in lines.iter().zip(coil.iter()) {
        let (x, y) = line.split_once(',').expect("malformed line");
        let x: f64 = x.trim().parse()?;
        let y: f64 = y.trim().parse()?;
        assert!((x - point.x).abs() < 5e-5, "{} vs {}", x, point.x);
        assert!((y - point.y).abs() < 5e-5, "{} vs {}", y, point.y);
    }
    Ok(())
}

#[test]
fn test_all_formats_produce_non_empty_files() -> anyhow::Result<()> {
    let params = spiral(3);
    let coil = generate(&params)?;
    let dir = TempDir::new()?;

    let written = export_all(
        &coil,
        dir.path(),
        &params.file_stem(),
        params.trace_width,
        Units::Inches,
    )?;

    assert_eq!(written.len(), 4);
    for path in &written {
        let metadata = fs::metadata(path)?;
        assert!(metadata.len() > 0, "{} is empty", path.display());
    }
    Ok(())
}

#[test]
fn test_reexport_overwrites_longer_previous_run() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("coil.txt");

    let long = generate(&spiral(10))?;
    let target = ExportTarget::new(ExportFormat::DrillList, &path, 1.0);
    export(&long, &target)?;
    let long_len = fs::read_to_string(&path)?.lines().count();

    let short = generate(&spiral(2))?;
    export(&short, &target)?;
    let content = fs::read_to_string(&path)?;

    assert_eq!(content.lines().count(), short.len());
    assert!(short.len() < long_len);
    Ok(())
}

#[test]
fn test_export_creates_missing_directories() -> anyhow::Result<()> {
    let coil = generate(&spiral(2))?;
    let dir = TempDir::new()?;
    let path = dir.path().join("nested").join("deeper").join("coil.gbr");

    let target = ExportTarget::for_path(&path, 1.0)?;
    export(&coil, &target)?;

    assert!(path.exists());
    Ok(())
}

#[test]
fn test_gerber_file_contract() -> anyhow::Result<()> {
    let params = spiral(4);
    let coil = generate(&params)?;
    let dir = TempDir::new()?;
    let path = dir.path().join("coil.gbr");

    export(
        &coil,
        &ExportTarget::new(ExportFormat::Gerber, &path, params.trace_width),
    )?;

    let content = fs::read_to_string(&path)?;
    assert!(content.starts_with("%FSLAX25Y25*%"));
    assert!(content.contains("%MOIN*%"));
    assert!(content.contains("%ADD10C,1.0000*%"));
    assert!(content.trim_end().ends_with("M02*"));

    let draws = content.lines().filter(|l| l.ends_with("D01*")).count();
    assert_eq!(draws, coil.len());
    Ok(())
}

#[test]
fn test_square_coil_exports_like_spiral() -> anyhow::Result<()> {
    let params = CoilParameters {
        shape: CoilShape::Square,
        close_path: true,
        ..spiral(5)
    };
    let coil = generate(&params)?;
    let dir = TempDir::new()?;

    let svg_path = dir.path().join("coil.svg");
    export(&coil, &ExportTarget::for_path(&svg_path, params.trace_width)?)?;
    let svg = fs::read_to_string(&svg_path)?;
    assert_eq!(svg.matches("<polyline").count(), 1);

    let dxf_path = dir.path().join("coil.dxf");
    export(&coil, &ExportTarget::for_path(&dxf_path, params.trace_width)?)?;
    let dxf = fs::read_to_string(&dxf_path)?;
    assert!(dxf.contains("LWPOLYLINE"));
    assert!(dxf.contains(&format!("{}", coil.len())));
    Ok(())
}

#[test]
fn test_unrecognized_extension_is_reported() {
    let err = ExportTarget::for_path("coil.step", 1.0).unwrap_err();
    assert!(err.to_string().contains("coil.step"));
}

#[test]
fn test_millimeter_declaration_does_not_rescale() -> anyhow::Result<()> {
    // Units only relabel the header; the coordinates must be written
    // exactly as generated.
    let coil = generate(&spiral(2))?;
    let dir = TempDir::new()?;
    let path = dir.path().join("coil.gbr");

    let target =
        ExportTarget::new(ExportFormat::Gerber, &path, 1.0).with_units(Units::Millimeters);
    export(&coil, &target)?;

    let content = fs::read_to_string(&path)?;
    assert!(content.contains("%MOMM*%"));
    let first = coil.first().unwrap();
    assert!(content.contains(&format!("X{:.4}Y{:.4}D01*", first.x, first.y)));
    Ok(())
}
