//! Seatplan - Terminal-based classroom seating chart editor
//!
//! Students from a roster are placed onto grids of seats arranged in
//! labeled columns. The chart can be exported as a PDF document or an
//! image, either interactively or through the headless subcommands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use seatplan::cli::{ConfigArgs, ExportArgs};
use seatplan::config::Config;
use seatplan::constants::APP_BINARY_NAME;
use seatplan::models::Roster;
use seatplan::parser::parse_roster_csv;
use seatplan::tui;

/// Seatplan - Terminal-based classroom seating chart editor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Roster CSV to load on startup (one student per line)
    #[arg(value_name = "FILE")]
    roster_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Export the seating chart without starting the TUI
    Export(ExportArgs),
    /// Show or edit the configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(command) = cli.command {
        let result = match command {
            Commands::Export(args) => args.execute(),
            Commands::Config(args) => args.execute(),
        };
        if let Err(e) = result {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code().code());
        }
        return Ok(());
    }

    let roster = match &cli.roster_path {
        Some(path) => {
            if !path.exists() {
                eprintln!("Error: Roster file not found: {}", path.display());
                eprintln!();
                eprintln!("Please provide a valid path to a CSV roster file.");
                eprintln!();
                eprintln!("Examples:");
                eprintln!("  {APP_BINARY_NAME} class_3b.csv");
                eprintln!("  {APP_BINARY_NAME} path/to/roster.csv");
                eprintln!();
                eprintln!("For more options, run:");
                eprintln!("  {APP_BINARY_NAME} --help");
                std::process::exit(1);
            }
            Roster::from_names(parse_roster_csv(path)?)
        }
        None => Roster::new(),
    };

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config: {e:#}");
        Config::default()
    });

    let mut terminal = tui::setup_terminal()?;
    let mut app_state = tui::AppState::new(config, roster);

    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore the terminal before surfacing any loop error
    tui::restore_terminal(terminal)?;
    result?;

    Ok(())
}
