//! End-to-end tests for the assembled workbook

use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use superbowl_guide::config::{ACTION_IMAGE, HALFTIME_IMAGE, STADIUM_IMAGE, TROPHY_IMAGE};
use superbowl_guide::data::{COVER_KPIS, SUPER_BOWLS};
use superbowl_guide::stats::team_wins;
use superbowl_guide::{build_workbook, render_to_buffer, write_report, ReportConfig, SHEET_NAMES};

// 1x1 transparent PNG
const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F, 0x15, 0xC4,
    0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00, 0x01, 0x00, 0x00,
    0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE,
    0x42, 0x60, 0x82,
];

fn write_assets(dir: &Path) {
    for name in [TROPHY_IMAGE, ACTION_IMAGE, STADIUM_IMAGE, HALFTIME_IMAGE] {
        fs::write(dir.join(name), TINY_PNG).unwrap();
    }
}

#[test]
fn test_sheet_order() {
    let dir = tempfile::tempdir().unwrap();
    let config = ReportConfig::new(dir.path().join("guide.xlsx"), dir.path());
    let (mut workbook, images) = build_workbook(&config).unwrap();
    assert_eq!(images, 0);

    let names: Vec<String> = workbook.worksheets().iter().map(|w| w.name()).collect();
    assert_eq!(names, SHEET_NAMES);
    assert_eq!(
        SHEET_NAMES,
        [
            "SUPER BOWL",
            "History",
            "Statistics",
            "Super Bowl LIX",
            "Economic Impact",
            "Halftime Shows",
        ]
    );
    assert!(workbook.save_to_buffer().unwrap().starts_with(b"PK"));
}

#[test]
fn test_render_to_buffer_is_zip() {
    let dir = tempfile::tempdir().unwrap();
    let config = ReportConfig::new(dir.path().join("unused.xlsx"), dir.path());
    let bytes = render_to_buffer(&config).unwrap();
    assert!(bytes.starts_with(b"PK"));
    assert!(!config.output_path.exists());
}

#[test]
fn test_write_without_assets() {
    let dir = tempfile::tempdir().unwrap();
    let config = ReportConfig::new(dir.path().join("guide.xlsx"), dir.path().join("no-art"));

    let summary = write_report(&config).unwrap();
    assert_eq!(summary.sheets, 6);
    assert_eq!(summary.images_embedded, 0);
    assert_eq!(summary.output_path, config.output_path);

    let bytes = fs::read(&summary.output_path).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_write_with_assets() {
    let dir = tempfile::tempdir().unwrap();
    write_assets(dir.path());
    let config = ReportConfig::new(dir.path().join("guide.xlsx"), dir.path());

    let summary = write_report(&config).unwrap();
    // trophy, action, stadium, halftime
    assert_eq!(summary.images_embedded, 4);
    assert!(summary.output_path.is_file());
}

#[test]
fn test_partial_assets() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(TROPHY_IMAGE), TINY_PNG).unwrap();
    fs::write(dir.path().join(HALFTIME_IMAGE), b"not a png").unwrap();
    let config = ReportConfig::new(dir.path().join("guide.xlsx"), dir.path());

    let summary = write_report(&config).unwrap();
    assert_eq!(summary.images_embedded, 1);
}

#[test]
fn test_unwritable_output_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = ReportConfig::new(dir.path().join("missing/dir/guide.xlsx"), dir.path());
    assert!(write_report(&config).is_err());
}

#[test]
fn test_cover_numbers_match_data() {
    assert_eq!(COVER_KPIS[0].value, SUPER_BOWLS.len().to_string());
    assert_eq!(COVER_KPIS[1].value, team_wins(SUPER_BOWLS).len().to_string());
}
