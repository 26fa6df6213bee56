//! dmd - tower bandwidth-demand CLI
//!
//! Usage:
//!   dmd current                     # Bandwidth as of the last stored day
//!   dmd add 0.3 0.5 0.1             # Append a day of demand percentages
//!   dmd delete 4                    # Remove day 4; later days shift down
//!   dmd edit 2 0.4 0.4 0.4          # Replace day 2's demand row
//!   dmd query 3                     # Bandwidth as of day 3
//!   dmd forecast                    # Trend forecast for the next day
//!
//! The demand table lives in a three-column CSV (`--file`, default
//! demanda.csv); the day-1 bandwidth seed comes from `--seed`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod error;
mod output;

use commands::{add, current, delete, edit, forecast, query};
use demanda::primitives::TowerVector;

/// dmd - Tower Bandwidth Demand Tool
///
/// Track daily demand percentages for towers A, B, and C and evolve a
/// compounding bandwidth figure per tower.
#[derive(Parser)]
#[command(name = "dmd")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the demand CSV file
    #[arg(long, global = true, default_value = "demanda.csv", value_name = "PATH")]
    file: PathBuf,

    /// Day-1 bandwidth seed, one value per tower
    #[arg(
        long,
        global = true,
        num_args = 3,
        value_names = ["A", "B", "C"],
        default_values_t = [1.0, 1.0, 1.0]
    )]
    seed: Vec<f32>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode (skip section headers)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the bandwidth as of the last stored day
    Current,

    /// Append a new day of demand percentages
    Add {
        /// Demand on tower A, in [0, 1]
        #[arg(value_parser = percentage)]
        a: f32,

        /// Demand on tower B, in [0, 1]
        #[arg(value_parser = percentage)]
        b: f32,

        /// Demand on tower C, in [0, 1]
        #[arg(value_parser = percentage)]
        c: f32,
    },

    /// Delete a day; all later days shift down by one
    Delete {
        /// 1-indexed day to delete
        #[arg(value_name = "DAY")]
        day: usize,
    },

    /// Replace a day's demand row in place
    Edit {
        /// 1-indexed day to edit
        #[arg(value_name = "DAY")]
        day: usize,

        /// New demand on tower A, in [0, 1]
        #[arg(value_parser = percentage)]
        a: f32,

        /// New demand on tower B, in [0, 1]
        #[arg(value_parser = percentage)]
        b: f32,

        /// New demand on tower C, in [0, 1]
        #[arg(value_parser = percentage)]
        c: f32,
    },

    /// Show the bandwidth as of a specific day
    Query {
        /// 1-indexed day to query
        #[arg(value_name = "DAY")]
        day: usize,
    },

    /// Predict next-day demand from the historical trend
    Forecast,
}

/// Bounds-checked demand percentage: the input boundary is the only
/// place percentages are validated.
fn percentage(s: &str) -> Result<f32, String> {
    let value: f32 = s.parse().map_err(|e| format!("not a number: {e}"))?;
    if !(0.0..=1.0).contains(&value) {
        return Err(format!("demand percentage must be in [0, 1], got {value}"));
    }
    Ok(value)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // num_args = 3 means clap already rejected any other arity.
    let seed = match TowerVector::from_slice(&cli.seed) {
        Ok(seed) => seed,
        Err(e) => {
            eprintln!("error: --seed: {e}");
            return ExitCode::from(2);
        }
    };

    let result = match cli.command {
        Commands::Current => current::run(&cli.file, &seed, cli.json, cli.quiet),

        Commands::Add { a, b, c } => add::run(
            &cli.file,
            &seed,
            TowerVector::new(a, b, c),
            cli.json,
            cli.quiet,
        ),

        Commands::Delete { day } => delete::run(&cli.file, &seed, day, cli.json, cli.quiet),

        Commands::Edit { day, a, b, c } => edit::run(
            &cli.file,
            &seed,
            day,
            TowerVector::new(a, b, c),
            cli.json,
            cli.quiet,
        ),

        Commands::Query { day } => query::run(&cli.file, &seed, day, cli.json, cli.quiet),

        Commands::Forecast => forecast::run(&cli.file, &seed, cli.json, cli.quiet),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}
