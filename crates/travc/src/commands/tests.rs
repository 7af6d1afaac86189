use std::io::Write;

use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;
use trav_diagnostic::ErrorCode;
use trav_geodesy::GeoPoint;

use super::*;

const HEADERS: &str = "\
H,P,Memo,Latitude,Longitude
H,L,Memo,Bearing,Distance,Direction
H,C,Memo,Distance,Direction,Radius,Delta
H,F,Memo,Name,Args...
H,V,Memo,Name
";

fn record_file(body: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    write!(file, "{HEADERS}{body}").unwrap();
    file
}

fn path(file: &NamedTempFile) -> &str {
    file.path().to_str().unwrap()
}

/// A 100 ft square walked clockwise from the equator.
const SQUARE: &str = "\
P,start,0,0
L,1,N0°0'0\"E,100,TRUE
L,2,N90°0'0\"E,100,TRUE
L,3,S0°0'0\"E,100,TRUE
L,4,N90°0'0\"W,100,TRUE
";

// === run ===

#[test]
fn run_prints_a_line_string_feature() {
    let file = record_file("P,start,37.4,-121.8\nP,end,37.5,-121.75\n");
    let config = RunConfig {
        name: Some("lot".to_string()),
        description: "corner".to_string(),
        ..RunConfig::default()
    };
    assert_eq!(
        run_traverse(path(&file), &config).unwrap(),
        "\"LINESTRING (-121.8 37.4,-121.75 37.5)\", \"lot\", \"corner\""
    );
}

#[test]
fn run_prints_a_single_point_as_point() {
    let file = record_file("P,start,37.4,-121.8\n");
    let config = RunConfig {
        name: Some("monument".to_string()),
        ..RunConfig::default()
    };
    assert_eq!(
        run_traverse(path(&file), &config).unwrap(),
        "\"POINT (-121.8 37.4)\", \"monument\", \"\""
    );
}

#[test]
fn run_names_the_feature_after_the_file() {
    let file = record_file("P,start,1,2\n");
    let out = run_traverse(path(&file), &RunConfig::default()).unwrap();
    let stem = file.path().file_stem().unwrap().to_string_lossy().into_owned();
    assert!(out.ends_with(&format!("\"{stem}\", \"\"")), "{out}");
}

#[test]
fn run_emits_a_closed_polygon() {
    let file = record_file(SQUARE);
    let config = RunConfig {
        polygon: true,
        ..RunConfig::default()
    };
    let out = run_traverse(path(&file), &config).unwrap();
    assert!(out.starts_with("\"POLYGON ((0 0,"), "{out}");
}

#[test]
fn run_polygon_needs_three_points() {
    let file = record_file("P,a,0,0\nL,1,90,100,TRUE\n");
    let config = RunConfig {
        polygon: true,
        ..RunConfig::default()
    };
    let diag = run_traverse(path(&file), &config).unwrap_err();
    assert_eq!(diag.code, ErrorCode::E4001);
}

#[test]
fn run_with_origin() {
    let file = record_file("L,1,N90°0'0\"E,100,TRUE\n");
    let config = RunConfig {
        origin: Some(GeoPoint::new(37.4, -121.8)),
        ..RunConfig::default()
    };
    let out = run_traverse(path(&file), &config).unwrap();
    assert!(out.starts_with("\"POINT (-121.79"), "{out}");
}

// === failures ===

#[test]
fn evaluation_error_points_at_file_and_record() {
    let file = record_file("P,start,0,0\nL,7,N90°0'0\"E,100,SIDEWAYS\n");
    let diag = run_traverse(path(&file), &RunConfig::default()).unwrap_err();

    assert_eq!(diag.code, ErrorCode::E2001);
    let location = diag.location.unwrap();
    assert_eq!(location.file.as_deref(), Some(path(&file)));
    assert_eq!(location.line, 7);
    assert_eq!(location.label.as_deref(), Some("L7"));
}

#[test]
fn reader_error_points_at_file() {
    let file = record_file("Q,1,2\n");
    let diag = run_traverse(path(&file), &RunConfig::default()).unwrap_err();
    assert_eq!(diag.code, ErrorCode::E1001);
    assert_eq!(diag.location.unwrap().line, 6);
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.csv");
    let diag = run_traverse(missing.to_str().unwrap(), &RunConfig::default()).unwrap_err();
    assert_eq!(diag.code, ErrorCode::E1004);
}

// === points ===

#[test]
fn points_lists_labels_and_closure() {
    let file = record_file(SQUARE);
    let out = list_points(path(&file), &RunConfig::default()).unwrap();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "Pstart\t0.000000000\t0.000000000");
    assert!(lines[1].starts_with("L1\t"));
    assert!(lines[4].starts_with("L4\t"));

    let gap: f64 = lines[5]
        .trim_start_matches("closure gap: ")
        .trim_end_matches(" ft")
        .parse()
        .unwrap();
    assert!(gap < 0.01, "{gap}");
}

#[test]
fn points_skips_closure_for_one_point() {
    let file = record_file("P,only,1,2\n");
    let out = list_points(path(&file), &RunConfig::default()).unwrap();
    assert_eq!(out, "Ponly\t1.000000000\t2.000000000");
}

#[test]
fn points_label_functions_that_produce_points() {
    let file = record_file(
        "P,start,0,0\nV,1,pob\nF,dp,destinationPoint,$pob,N0°0'0\"E,100\n",
    );
    let out = list_points(path(&file), &RunConfig::default()).unwrap();
    assert!(out.lines().nth(1).unwrap().starts_with("Fdp\t"), "{out}");
}

// === explain ===

#[test]
fn explain_known_code() {
    let doc = explain_error("e2002").unwrap();
    assert!(doc.starts_with("# E2002"));
}

#[test]
fn explain_unknown_code() {
    let msg = explain_error("E9999").unwrap_err();
    assert!(msg.starts_with("Unknown error code: E9999"));
}
