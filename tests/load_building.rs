use anyhow::Result;
use daylighting::io::snapshot::{read_snapshot, write_snapshot};
use daylighting::{
    read_building_file, read_library_file, CaretDecoder, GridMesher, Point,
};
use std::fmt::Write as _;
use std::fs;
use tempfile::tempdir;

/// One zone, one four-vertex surface, one window, no CFS, one reference point.
fn building_text() -> String {
    let mut s = String::new();
    s.push_str("Building Description\n====================\n");
    s.push_str("NAME office_bldg\n");
    s.push_str("LATITUDE 37.6\nLONGITUDE -122.4\nALTITUDE 10.0\nAZIMUTH 0.0\nTIMEZONE -8.0\n");
    writeln!(s, "ATM_MOISTURE{}", " 0.5".repeat(12)).unwrap();
    writeln!(s, "ATM_TURBIDITY{}", " 0.12".repeat(12)).unwrap();

    s.push_str("ZONES\n-----\nN_ZONES 1\n");
    s.push_str("ZONE DATA\n---------\n");
    s.push_str("ZONE_NAME office\n");
    s.push_str("ORIGIN 0.0 0.0 0.0\nAZIMUTH 0.0\nMULTIPLIER 1.0\n");
    s.push_str("FLOOR_AREA 25.0\nVOLUME 75.0\nLIGHTING 400.0\n");
    s.push_str("MIN_POWER 0.3\nMIN_LIGHT 0.2\nCTRL_STEPS 3\nCTRL_PROB 1.0\n");
    s.push_str("VIEW_AZIMUTH 180.0\nMAX_GRID_NODE_AREA 0.25\n");

    s.push_str("LIGHTING SCHEDULES\n------------------\nN_SCHEDULES 0\n");

    s.push_str("ZONE SURFACES\n-------------\nN_SURFACES 1\n");
    s.push_str("SURFACE DATA\n------------\n");
    s.push_str("SURF_NAME south_wall\n");
    s.push_str("AZIMUTH 180.0\nTILT 90.0\n");
    s.push_str("VIS_REFL 0.5\nEXT_VIS_REFL 0.2\nGND_REFL 0.2\n");
    s.push_str("N_VERTICES 4\n");
    s.push_str("VERTEX 0.0 0.0 0.0\n");
    s.push_str("VERTEX 5.0 0.0 0.0\n");
    s.push_str("VERTEX 5.0 0.0 3.0\n");
    s.push_str("VERTEX 0.0 0.0 3.0\n");

    s.push_str("SURFACE WINDOWS\n---------------\nN_WINDOWS 1\n");
    s.push_str("WINDOW DATA\n-----------\n");
    s.push_str("WNDO_NAME south_wndo\n");
    s.push_str("GLASS_TYPE clear_double\nSHADE_FLAG 0\n");
    writeln!(s, "ZSHADE_X{}", " 0.0".repeat(4)).unwrap();
    writeln!(s, "ZSHADE_Y{}", " 0.0".repeat(4)).unwrap();
    s.push_str("N_VERTICES 4\n");
    s.push_str("VERTEX 1.0 0.0 1.0\n");
    s.push_str("VERTEX 2.0 0.0 1.0\n");
    s.push_str("VERTEX 2.0 0.0 2.0\n");
    s.push_str("VERTEX 1.0 0.0 2.0\n");

    s.push_str("SURFACE CFS\n-----------\nN_CFS 0\n");

    s.push_str("ZONE REFERENCE POINTS\n---------------------\nN_REFPTS 1\n");
    s.push_str("REFERENCE POINT DATA\n--------------------\n");
    s.push_str("REFPT_NAME desk\n");
    s.push_str("COORDS 2.5 2.5 0.8\n");
    s.push_str("ZONE_FRACTION 1.0\nLIGHT_SETPOINT 500.0\nCTRL_TYPE 1\n");

    s.push_str("BUILDING SHADES\n---------------\nN_SHADES 0\n");
    s
}

fn library_text() -> String {
    let mut s = String::from("Library Data\nGLASS TYPES\n-----------\nN_GLASS_TYPES 1\n");
    s.push_str("GLASS TYPE DATA\n---------------\n");
    s.push_str("NAME clear_double\n");
    s.push_str("DIFFUSE_TRANS 0.7\nINSIDE_REFL 0.08\n");
    for i in 1..=6 {
        writeln!(s, "COEF {}", i as f64 / 10.0).unwrap();
    }
    s
}

#[test]
fn test_load_building_from_file() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("office.in");
    fs::write(&path, building_text())?;

    let mut diag = Vec::new();
    let bldg = read_building_file(&path, &CaretDecoder, &GridMesher, &mut diag)?;
    assert!(diag.is_empty());

    assert_eq!(bldg.name, "office_bldg");
    assert_eq!(bldg.site.latitude, 37.6);
    assert_eq!(bldg.zones.len(), 1);

    let zone = bldg.get_zone("office").unwrap();
    assert_eq!(zone.surfaces.len(), 1);
    assert_eq!(zone.window_count(), 1);
    assert_eq!(zone.ref_points.len(), 1);

    let surf = zone.get_surface("south_wall").unwrap();
    assert_eq!(surf.azimuth_zone, 180.0);
    assert!(surf.cfs_systems.is_empty());

    // Vertex loop [v0, v1, v2, v3] converts to [v2, v1, v0, v3]
    let expected = [
        Point::new(5.0, 0.0, 3.0),
        Point::new(5.0, 0.0, 0.0),
        Point::new(0.0, 0.0, 0.0),
        Point::new(0.0, 0.0, 3.0),
    ];
    assert_eq!(surf.vertices_inside.len(), 4);
    for (got, want) in surf.vertices_inside.iter().zip(expected.iter()) {
        assert!(got.is_close(want));
    }

    let rp = zone.get_ref_point("desk").unwrap();
    assert_eq!(rp.lum_slot_count(), 1);
    assert!(rp.bldg_coords.is_close(&Point::new(2.5, 2.5, 0.8)));

    bldg.validate()?;
    Ok(())
}

#[test]
fn test_load_library_from_file() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("library.in");
    fs::write(&path, library_text())?;

    let mut diag = Vec::new();
    let lib = read_library_file(&path, &mut diag)?;
    assert_eq!(lib.glass.len(), 1);

    let glass = lib.get_glass("clear_double").unwrap();
    assert_eq!(glass.diffuse_trans, 0.7);
    assert_eq!(glass.coefs, [0.1, 0.2, 0.3, 0.4, 0.5, 0.6]);
    Ok(())
}

#[test]
fn test_snapshot_roundtrip_of_loaded_model() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("office.in");
    fs::write(&input, building_text())?;

    let mut diag = Vec::new();
    let original = read_building_file(&input, &CaretDecoder, &GridMesher, &mut diag)?;

    let snapshot = dir.path().join("office.json");
    write_snapshot(&snapshot, &original)?;
    let loaded = read_snapshot(&snapshot)?;

    assert_eq!(loaded.name, original.name);
    let zone = loaded.get_zone("office").unwrap();
    let surf = zone.get_surface("south_wall").unwrap();
    assert_eq!(surf.vertices_inside.len(), 4);
    assert_eq!(zone.ref_points[0].lum_slot_count(), 1);
    Ok(())
}

#[test]
fn test_missing_file_error_names_path() {
    let mut diag = Vec::new();
    let err = read_building_file(
        std::path::Path::new("/nonexistent/office.in"),
        &CaretDecoder,
        &GridMesher,
        &mut diag,
    )
    .unwrap_err();
    assert!(format!("{err}").contains("/nonexistent/office.in"));
}
