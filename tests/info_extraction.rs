use std::fs;
use std::path::PathBuf;

use cricbuzz_stats::info::{extract_info, parse_age, parse_height};
use cricbuzz_stats::profile::parse_profile;

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

#[test]
fn extracts_full_info_record() {
    let document = parse_profile(&read_fixture("profile.html"));
    let info = extract_info(&document).expect("fixture should yield info");
    assert_eq!(info.age, Some(37));
    let height = info.height_ft.expect("height present");
    assert!((height - 5.9).abs() < 1e-9);
    assert_eq!(info.role, "top-order batter");
    assert_eq!(info.batting_style, "right handed bat");
    assert_eq!(info.bowling_style, "right-arm medium");
}

#[test]
fn four_cells_leave_bowling_style_empty() {
    let document = parse_profile(&read_fixture("profile_no_bowling.html"));
    let info = extract_info(&document).expect("fixture should yield info");
    assert_eq!(info.age, Some(44));
    let height = info.height_ft.expect("height present");
    assert!((height - 175.0 / 30.48).abs() < 1e-9);
    assert_eq!(info.role, "wk-batter");
    assert_eq!(info.bowling_style, "");
}

#[test]
fn too_few_cells_is_absent() {
    let document = parse_profile("<html><body><div class=\"cb-lst-itm-sm\">x</div></body></html>");
    assert!(extract_info(&document).is_none());
}

#[test]
fn height_converts_meters_to_feet() {
    let height = parse_height("1.75 m").expect("meters should parse");
    assert!((height - 1.75 * 3.281).abs() < 1e-9);
    assert!((height - 5.74).abs() < 0.01);
}

#[test]
fn height_converts_centimeters_to_feet() {
    let height = parse_height("175 cm").expect("centimeters should parse");
    assert!((height - 5.74).abs() < 0.01);
}

#[test]
fn height_keeps_feet_as_is() {
    let height = parse_height("5 ft").expect("feet should parse");
    assert!((height - 5.0).abs() < 1e-9);
}

#[test]
fn height_composes_feet_and_inches() {
    let height = parse_height("5 ft 9 in").expect("feet and inches should parse");
    assert!((height - 5.9).abs() < 1e-9);
}

#[test]
fn unknown_height_suffix_is_absent() {
    assert!(parse_height("180 furlongs").is_none());
    assert!(parse_height("tall").is_none());
    assert!(parse_height("").is_none());
}

#[test]
fn age_needs_a_parenthesis() {
    assert_eq!(parse_age("nov 05, 1988 (37 years)"), Some(37));
    assert_eq!(parse_age("nov 05, 1988"), None);
    assert_eq!(parse_age(""), None);
}
