use std::f64::consts::PI;

use dxf::entities::{Entity, EntityType};
use dxf::enums::AcadVersion;
use dxf::Drawing;
use shimwave_dxf::{extract_file, ExtractionError};
use tempfile::TempDir;

fn save(dir: &TempDir, name: &str, drawing: &Drawing) -> std::path::PathBuf {
    let path = dir.path().join(name);
    drawing.save_file(&path).unwrap();
    path
}

#[test]
fn test_extract_saved_drawing() {
    let dir = TempDir::new().unwrap();
    let mut drawing = Drawing::new();
    drawing.header.version = AcadVersion::R2000;
    drawing.add_entity(Entity::new(EntityType::Line(dxf::entities::Line::new(
        dxf::Point::new(-7.413, 0.0, 0.0),
        dxf::Point::new(-2.0, 0.0, 0.0),
    ))));
    drawing.add_entity(Entity::new(EntityType::Arc(dxf::entities::Arc::new(
        dxf::Point::new(0.0, 0.0, 0.0),
        2.0,
        0.0,
        180.0,
    ))));
    drawing.add_entity(Entity::new(EntityType::Circle(dxf::entities::Circle::new(
        dxf::Point::new(0.0, 0.0, 0.0),
        1.0,
    ))));
    let path = save(&dir, "coil.dxf", &drawing);

    let geometry = extract_file(&path).unwrap();
    assert_eq!(geometry.lines.len(), 1);
    assert_eq!(geometry.arcs.len(), 1);
    assert_eq!(geometry.ignored, 1);
    assert!((geometry.arcs[0].end_angle - PI).abs() < 1e-9);
    assert!((geometry.lines[0].start.x + 7.413).abs() < 1e-9);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = extract_file(dir.path().join("absent.dxf")).unwrap_err();
    assert!(matches!(err, ExtractionError::Io { .. }));
}

#[test]
fn test_garbage_file_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("garbage.dxf");
    std::fs::write(&path, "this is not a drawing\nat all\n").unwrap();

    let err = extract_file(&path).unwrap_err();
    assert!(matches!(err, ExtractionError::Parse { .. }));
    assert!(err.to_string().contains("garbage.dxf"));
}
