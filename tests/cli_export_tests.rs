//! End-to-end tests for `seatplan export`.

use std::fs;
use std::path::Path;
use std::process::Command;

/// Path to the seatplan binary
fn seatplan_bin() -> &'static str {
    env!("CARGO_BIN_EXE_seatplan")
}

fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(seatplan_bin());
    cmd.env("SEATPLAN_CONFIG_DIR", config_dir);
    cmd.args(args);
    cmd
}

#[test]
fn test_export_pdf() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("chart.pdf");

    let output = isolated_command(
        &["export", "--output", out_path.to_str().unwrap()],
        dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Export should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let bytes = fs::read(&out_path).expect("Export file should exist");
    assert!(bytes.starts_with(b"%PDF"), "Output should be a PDF");
}

#[test]
fn test_export_png() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("chart.png");

    let output = isolated_command(
        &[
            "export",
            "--format",
            "png",
            "--output",
            out_path.to_str().unwrap(),
        ],
        dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let bytes = fs::read(&out_path).unwrap();
    assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
}

#[test]
fn test_export_jpeg() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("chart.jpg");

    let output = isolated_command(
        &[
            "export",
            "--format",
            "jpeg",
            "--output",
            out_path.to_str().unwrap(),
        ],
        dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let bytes = fs::read(&out_path).unwrap();
    assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
}

#[test]
fn test_export_with_roster_csv() {
    let dir = tempfile::tempdir().unwrap();
    let roster_path = dir.path().join("class.csv");
    fs::write(&roster_path, "Alice Johnson,3B\nBob Smith,3B\n\nAlice Johnson\n").unwrap();
    let out_path = dir.path().join("chart.pdf");

    let output = isolated_command(
        &[
            "export",
            "--roster",
            roster_path.to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
        ],
        dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(fs::read(&out_path).unwrap().starts_with(b"%PDF"));
}

#[test]
fn test_export_missing_roster_fails_with_io_code() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("chart.pdf");

    let output = isolated_command(
        &[
            "export",
            "--roster",
            "/nonexistent/roster.csv",
            "--output",
            out_path.to_str().unwrap(),
        ],
        dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    assert!(!out_path.exists());
}

#[test]
fn test_export_honors_configured_layout() {
    let dir = tempfile::tempdir().unwrap();
    // column1 is overridden; column2/column3 come back via the shallow merge
    fs::write(
        dir.path().join("config.json"),
        r#"{
            "layout_config": {
                "column1": { "rows": 2, "cols": 2, "row_height": 40, "col_width": 50 }
            },
            "column_names": { "column1": "Front" }
        }"#,
    )
    .unwrap();
    let out_path = dir.path().join("chart.png");

    let output = isolated_command(
        &[
            "export",
            "--format",
            "png",
            "--output",
            out_path.to_str().unwrap(),
        ],
        dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(out_path.exists());
}

#[test]
fn test_export_rejects_invalid_layout() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("config.json"),
        r#"{ "layout_config": { "column1": { "rows": 0, "cols": 3, "row_height": 60, "col_width": 80 } } }"#,
    )
    .unwrap();

    let output = isolated_command(&["export", "--output", "/tmp/unused.pdf"], dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(1));
}
