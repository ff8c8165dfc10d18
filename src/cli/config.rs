//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::{Config, ThemeMode};
use clap::{Args, Subcommand};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Theme mode (light or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,

    /// Column grid shape, e.g. column1=8x3 (repeatable)
    #[arg(long, value_name = "KEY=ROWSxCOLS")]
    shape: Vec<String>,

    /// Column display name, e.g. column1=South (repeatable)
    #[arg(long, value_name = "KEY=NAME")]
    name: Vec<String>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e}")))?;

        if self.json {
            let json = serde_json::to_string_pretty(&config).map_err(|e| {
                CliError::io(format!("Failed to serialize configuration to JSON: {e}"))
            })?;
            println!("{json}");
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.theme.is_none() && self.shape.is_empty() && self.name.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --theme, --shape, or --name",
            ));
        }

        let mut config = Config::load().unwrap_or_default();

        if let Some(theme_str) = &self.theme {
            config.theme = match theme_str.to_lowercase().as_str() {
                "light" => ThemeMode::Light,
                "dark" => ThemeMode::Dark,
                _ => {
                    return Err(CliError::validation(
                        "Invalid theme mode. Must be 'light' or 'dark'",
                    ))
                }
            };
        }

        for spec in &self.shape {
            let (key, shape) = parse_shape_spec(spec)?;
            let entry = config.layout_config.entry(key).or_default();
            entry.rows = shape.0;
            entry.cols = shape.1;
        }

        for spec in &self.name {
            let (key, name) = spec.split_once('=').ok_or_else(|| {
                CliError::validation(format!("Invalid column name '{spec}', expected KEY=NAME"))
            })?;
            config
                .column_names
                .insert(key.trim().to_string(), name.trim().to_string());
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))?;
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e}")))?;

        println!("Configuration updated successfully.");
        Ok(())
    }
}

/// Parses a `key=ROWSxCOLS` shape specification.
fn parse_shape_spec(spec: &str) -> CliResult<(String, (usize, usize))> {
    let (key, shape) = spec.split_once('=').ok_or_else(|| {
        CliError::validation(format!("Invalid shape '{spec}', expected KEY=ROWSxCOLS"))
    })?;
    let (rows, cols) = shape.split_once(['x', 'X']).ok_or_else(|| {
        CliError::validation(format!("Invalid shape '{spec}', expected KEY=ROWSxCOLS"))
    })?;
    let rows = rows
        .trim()
        .parse()
        .map_err(|_| CliError::validation(format!("Invalid row count in '{spec}'")))?;
    let cols = cols
        .trim()
        .parse()
        .map_err(|_| CliError::validation(format!("Invalid col count in '{spec}'")))?;
    Ok((key.trim().to_string(), (rows, cols)))
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("Seatplan Configuration");
    println!("======================");
    println!();

    println!("Columns:");
    for (key, shape) in &config.layout_config {
        println!(
            "  {} ({}): {} rows x {} cols",
            key,
            config.column_name(key),
            shape.rows,
            shape.cols
        );
    }
    println!();

    println!("Theme: {}", format!("{:?}", config.theme).to_lowercase());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shape_spec() {
        let (key, (rows, cols)) = parse_shape_spec("column1=8x3").unwrap();
        assert_eq!(key, "column1");
        assert_eq!((rows, cols), (8, 3));
    }

    #[test]
    fn test_parse_shape_spec_uppercase_separator() {
        let (_, (rows, cols)) = parse_shape_spec("column2=10X2").unwrap();
        assert_eq!((rows, cols), (10, 2));
    }

    #[test]
    fn test_parse_shape_spec_rejects_garbage() {
        assert!(parse_shape_spec("column1").is_err());
        assert!(parse_shape_spec("column1=8").is_err());
        assert!(parse_shape_spec("column1=axb").is_err());
    }
}
