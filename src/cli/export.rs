//! Export command for rendering the seating chart headlessly.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::export;
use crate::models::Roster;
use crate::parser::parse_roster_csv;
use crate::services::ChartState;
use clap::{Args, ValueEnum};
use std::fs;
use std::path::PathBuf;

/// Output format for the exported chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Printable PDF document with student names
    Pdf,
    /// PNG raster snapshot of the room
    Png,
    /// JPEG raster snapshot of the room
    Jpeg,
}

/// Export the seating chart to a file
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Output path (defaults to seating_chart_[date].[ext])
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Pdf)]
    pub format: ExportFormat,

    /// Roster CSV to load before rendering (one student per line)
    #[arg(short, long, value_name = "FILE")]
    pub roster: Option<PathBuf>,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load().unwrap_or_default();
        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))?;

        let roster = match &self.roster {
            Some(path) => {
                let names = parse_roster_csv(path)
                    .map_err(|e| CliError::io(format!("Failed to load roster: {e}")))?;
                Roster::from_names(names)
            }
            None => Roster::new(),
        };
        let chart = ChartState::new(roster, &config.layout_config);

        let bytes = match self.format {
            ExportFormat::Pdf => export::render_document(&chart, &config)
                .map_err(|e| CliError::io(format!("Failed to render PDF: {e}")))?,
            ExportFormat::Png => export::render_png(&chart, &config)
                .map_err(|e| CliError::io(format!("Failed to render PNG: {e}")))?,
            ExportFormat::Jpeg => export::render_jpeg(&chart, &config)
                .map_err(|e| CliError::io(format!("Failed to render JPEG: {e}")))?,
        };

        let output_path = self.output_path();
        fs::write(&output_path, bytes)
            .map_err(|e| CliError::io(format!("Failed to write output file: {e}")))?;

        println!("Exported seating chart to: {}", output_path.display());
        Ok(())
    }

    /// The output file path (either user-specified or auto-generated).
    fn output_path(&self) -> PathBuf {
        if let Some(ref path) = self.output {
            return path.clone();
        }

        let date = chrono::Local::now().format("%Y-%m-%d");
        let ext = match self.format {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
        };
        PathBuf::from(format!("seating_chart_{date}.{ext}"))
    }
}
