//! Configuration management for the application.
//!
//! This module handles loading, merging, and saving application
//! configuration in JSON format with platform-specific directory
//! resolution. Loading performs a shallow merge against built-in
//! defaults so partial or older-version config files remain usable.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use crate::constants::CONFIG_DIR_ENV;

/// Theme preference persisted as `"LIGHT"` or `"DARK"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ThemeMode {
    /// Light terminal theme
    #[default]
    Light,
    /// Dark terminal theme
    Dark,
}

/// Grid shape and per-seat pixel dimensions for one column.
///
/// `row_height` and `col_width` are purely presentational; only
/// `rows`/`cols` affect the seat grid itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnShape {
    /// Number of seat rows
    pub rows: usize,
    /// Number of seat columns
    pub cols: usize,
    /// Seat cell height in pixels (export rendering)
    pub row_height: u32,
    /// Seat cell width in pixels (export rendering)
    pub col_width: u32,
}

impl Default for ColumnShape {
    fn default() -> Self {
        Self {
            rows: 8,
            cols: 3,
            row_height: 60,
            col_width: 80,
        }
    }
}

/// Mapping from column key to its grid shape.
pub type LayoutConfig = BTreeMap<String, ColumnShape>;

/// Window geometry preferences. The terminal UI sizes itself, but these
/// values are persisted for compatibility with the on-disk format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window/application title
    pub title: String,
    /// Maximum width in pixels
    pub max_width: u32,
    /// Maximum height in pixels
    pub max_height: u32,
    /// Minimum width in pixels
    pub min_width: u32,
    /// Minimum height in pixels
    pub min_height: u32,
    /// Fraction of the screen to occupy initially
    pub size_percentage: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Classroom Seating Planner".to_string(),
            max_width: 1200,
            max_height: 800,
            min_width: 900,
            min_height: 700,
            size_percentage: 0.85,
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/seatplan/config.json`
/// - macOS: `~/Library/Application Support/seatplan/config.json`
/// - Windows: `%APPDATA%\seatplan\config.json`
///
/// The `SEATPLAN_CONFIG_DIR` environment variable overrides the
/// directory (used by the integration tests for isolation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Column key -> grid shape
    pub layout_config: LayoutConfig,
    /// Column key -> display name
    pub column_names: BTreeMap<String, String>,
    /// Window geometry preferences
    pub window: WindowConfig,
    /// Theme preference
    pub theme: ThemeMode,
    /// Style-target -> style string (presentational, persisted as-is)
    pub styles: BTreeMap<String, String>,
}

impl Config {
    /// Creates a new Config with default values: three columns of
    /// 8x3 seats named South, Middle, and North.
    #[must_use]
    pub fn new() -> Self {
        let column_keys = ["column1", "column2", "column3"];
        let layout_config = column_keys
            .iter()
            .map(|key| ((*key).to_string(), ColumnShape::default()))
            .collect();
        let column_names = column_keys
            .iter()
            .zip(["South", "Middle", "North"])
            .map(|(key, name)| ((*key).to_string(), name.to_string()))
            .collect();
        let styles = [("main_window", "background-color: #f5f7fa;")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Self {
            layout_config,
            column_names,
            window: WindowConfig::default(),
            theme: ThemeMode::default(),
            styles,
        }
    }

    /// Display name for a column key, falling back to the key itself.
    #[must_use]
    pub fn column_name<'a>(&'a self, key: &'a str) -> &'a str {
        self.column_names.get(key).map_or(key, String::as_str)
    }

    /// Gets the config directory path, honoring the environment
    /// override before falling back to the platform default.
    pub fn config_dir() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("seatplan");
        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Loads configuration from the config file.
    ///
    /// - Missing file: the built-in defaults are written to disk and
    ///   returned.
    /// - Malformed file: a warning is printed and the defaults are
    ///   returned without touching the file.
    /// - Otherwise the file is shallow-merged over the defaults, so
    ///   top-level keys and one-level-nested keys absent from the file
    ///   fall back silently.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            let config = Self::new();
            // First run: persist the defaults so the user has a file to edit.
            // A read-only config dir is not fatal.
            if let Err(e) = config.save() {
                eprintln!("Warning: failed to write default config: {e:#}");
            }
            return Ok(config);
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        match serde_json::from_str::<Value>(&content) {
            Ok(file_value) => {
                let merged = Self::merge_with_defaults(file_value);
                match serde_json::from_value(merged) {
                    Ok(config) => Ok(config),
                    Err(e) => {
                        eprintln!(
                            "Warning: config file {} has invalid values ({e}), using defaults",
                            config_path.display()
                        );
                        Ok(Self::new())
                    }
                }
            }
            Err(e) => {
                eprintln!(
                    "Warning: config file {} is not valid JSON ({e}), using defaults",
                    config_path.display()
                );
                Ok(Self::new())
            }
        }
    }

    /// Shallow merge: any top-level or one-level-nested key missing from
    /// `file_value` is filled in from the defaults.
    fn merge_with_defaults(file_value: Value) -> Value {
        let defaults = serde_json::to_value(Self::new()).unwrap_or(Value::Null);

        let (Value::Object(mut file_map), Value::Object(default_map)) = (file_value, defaults)
        else {
            return serde_json::to_value(Self::new()).unwrap_or(Value::Null);
        };

        for (key, default_value) in default_map {
            match file_map.get_mut(&key) {
                None => {
                    file_map.insert(key, default_value);
                }
                Some(Value::Object(file_nested)) => {
                    if let Value::Object(default_nested) = default_value {
                        for (sub_key, sub_value) in default_nested {
                            file_nested.entry(sub_key).or_insert(sub_value);
                        }
                    }
                }
                Some(_) => {}
            }
        }

        Value::Object(file_map)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes. Interactive
    /// callers log failures rather than propagating them.
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("json.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values: every column named in
    /// `layout_config` needs a non-degenerate shape.
    pub fn validate(&self) -> Result<()> {
        for (key, shape) in &self.layout_config {
            if shape.rows == 0 || shape.cols == 0 {
                anyhow::bail!(
                    "Column '{}' has a degenerate shape ({}x{})",
                    key,
                    shape.rows,
                    shape.cols
                );
            }
            if shape.rows > 20 || shape.cols > 10 {
                anyhow::bail!(
                    "Column '{}' exceeds the maximum shape of 20x10 (got {}x{})",
                    key,
                    shape.rows,
                    shape.cols
                );
            }
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
