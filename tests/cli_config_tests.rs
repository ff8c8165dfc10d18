//! End-to-end tests for `seatplan config` commands.

use std::path::Path;
use std::process::Command;

/// Path to the seatplan binary
fn seatplan_bin() -> &'static str {
    env!("CARGO_BIN_EXE_seatplan")
}

/// Creates a Command with an isolated config directory for testing.
fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(seatplan_bin());
    cmd.env("SEATPLAN_CONFIG_DIR", config_dir);
    cmd.args(args);
    cmd
}

#[test]
fn test_config_show_default() {
    let dir = tempfile::tempdir().unwrap();
    let output = isolated_command(&["config", "show"], dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Show config should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("column1"));
    assert!(stdout.contains("8 rows x 3 cols"));
    assert!(stdout.contains("light"));
}

#[test]
fn test_config_show_json_format() {
    let dir = tempfile::tempdir().unwrap();
    let output = isolated_command(&["config", "show", "--json"], dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("Should parse JSON output");

    assert!(value["layout_config"].is_object());
    assert!(value["column_names"].is_object());
    assert_eq!(value["theme"], "LIGHT");
    assert_eq!(value["layout_config"]["column1"]["rows"], 8);
    assert_eq!(value["column_names"]["column1"], "South");
}

#[test]
fn test_config_set_theme_round_trips() {
    let dir = tempfile::tempdir().unwrap();

    let output = isolated_command(&["config", "set", "--theme", "dark"], dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let output = isolated_command(&["config", "show", "--json"], dir.path())
        .output()
        .expect("Failed to execute command");
    let value: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(value["theme"], "DARK");
}

#[test]
fn test_config_set_shape_and_name() {
    let dir = tempfile::tempdir().unwrap();

    let output = isolated_command(
        &[
            "config",
            "set",
            "--shape",
            "column1=6x2",
            "--name",
            "column1=Window row",
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

    let output = isolated_command(&["config", "show", "--json"], dir.path())
        .output()
        .expect("Failed to execute command");
    let value: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(value["layout_config"]["column1"]["rows"], 6);
    assert_eq!(value["layout_config"]["column1"]["cols"], 2);
    assert_eq!(value["column_names"]["column1"], "Window row");
    // Untouched columns keep their defaults
    assert_eq!(value["layout_config"]["column2"]["rows"], 8);
}

#[test]
fn test_config_set_rejects_degenerate_shape() {
    let dir = tempfile::tempdir().unwrap();
    let output = isolated_command(&["config", "set", "--shape", "column1=0x3"], dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("degenerate"), "stderr: {stderr}");
}

#[test]
fn test_config_set_requires_an_option() {
    let dir = tempfile::tempdir().unwrap();
    let output = isolated_command(&["config", "set"], dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_config_set_rejects_unknown_theme() {
    let dir = tempfile::tempdir().unwrap();
    let output = isolated_command(&["config", "set", "--theme", "sepia"], dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_partial_config_file_is_merged() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "theme": "DARK", "window": { "title": "Class 3B" } }"#,
    )
    .unwrap();

    let output = isolated_command(&["config", "show", "--json"], dir.path())
        .output()
        .expect("Failed to execute command");
    let value: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();

    // Values from the file survive, missing keys come from defaults
    assert_eq!(value["theme"], "DARK");
    assert_eq!(value["window"]["title"], "Class 3B");
    assert_eq!(value["window"]["max_width"], 1200);
    assert_eq!(value["layout_config"]["column1"]["rows"], 8);
}

#[test]
fn test_malformed_config_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.json"), "{ not json").unwrap();

    let output = isolated_command(&["config", "show", "--json"], dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));

    let value: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(value["theme"], "LIGHT");
}

#[test]
fn test_first_run_writes_default_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.json");
    assert!(!config_path.exists());

    isolated_command(&["config", "show"], dir.path())
        .output()
        .expect("Failed to execute command");

    assert!(config_path.exists(), "First run should persist defaults");
    let content = std::fs::read_to_string(&config_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["theme"], "LIGHT");
}
