use stringtest_io::{denormalize, save_stl, StlFormat};
use stringtest_mesh::{build_test_plate, PlateSpec};

#[test]
fn export_production_plate_binary() {
    let mesh = build_test_plate(&PlateSpec::default()).unwrap();
    let triangles = denormalize(&mesh);
    assert_eq!(triangles.len(), 396);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("PETG_Stringing_Test.stl");
    save_stl(&path, &triangles, StlFormat::Binary).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes.len(), 84 + 50 * 396);

    let count = u32::from_le_bytes(bytes[80..84].try_into().unwrap());
    assert_eq!(count, 396);
}

#[test]
fn export_is_byte_identical_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let path_a = dir.path().join("a.stl");
    let path_b = dir.path().join("b.stl");

    // Two independent builds from the same constants
    let first = denormalize(&build_test_plate(&PlateSpec::default()).unwrap());
    let second = denormalize(&build_test_plate(&PlateSpec::default()).unwrap());

    save_stl(&path_a, &first, StlFormat::Binary).unwrap();
    save_stl(&path_b, &second, StlFormat::Binary).unwrap();

    assert_eq!(std::fs::read(&path_a).unwrap(), std::fs::read(&path_b).unwrap());
}

#[test]
fn export_production_plate_ascii() {
    let mesh = build_test_plate(&PlateSpec::default()).unwrap();
    let triangles = denormalize(&mesh);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plate.stl");
    save_stl(&path, &triangles, StlFormat::Ascii).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.matches("facet normal").count(), 396);
}
