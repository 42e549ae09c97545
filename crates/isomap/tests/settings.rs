#![cfg(feature = "schema")]

use isomap::isomap_schema::{catalog_records, load_catalog, save_catalog};
use isomap::prelude::tiles::*;
use isomap::prelude::*;

#[test]
fn test_compiled_catalog_validates() {
    assert!(validate_catalog().is_ok());
}

#[test]
fn test_settings_file_drives_realignment() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("isomap.toml");
    std::fs::write(
        &path,
        r#"
[realign]
out_of_bounds = "disconnected"
"#,
    )
    .unwrap();
    let config = load_settings(&path).unwrap();

    let mut grid = Grid::new(1, 1, 1);
    grid.set(0, 0, 0, Some(PATH_GRASS_FGTR));
    realign_grid_with(&mut grid, &config.realign);
    assert_eq!(grid.get(0, 0, 0), Some(PATH_GRASS_GR));
}

#[test]
fn test_invalid_settings_are_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("isomap.json");
    std::fs::write(&path, r#"{ "realign": { "height_tolerance": 99 } }"#).unwrap();
    let result = load_settings(&path);
    assert!(matches!(result, Err(SchemaError::ValidationError(_))));
}

#[test]
fn test_exported_catalog_round_trips_through_disk() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("catalog.json");
    save_catalog(&path).unwrap();

    let loaded = load_catalog(&path).unwrap();
    let record = loaded.tile("slope_grass_g").unwrap();
    assert_eq!(record.index, SLOPE_GRASS_G);
    assert_eq!(
        record.rotations,
        Some([SLOPE_GRASS_G, SLOPE_GRASS_T, SLOPE_GRASS_R, SLOPE_GRASS_F])
    );
    assert_eq!(loaded, catalog_records());
}
