//! Forecast command: trend-fit demand and bandwidth for the next day.

use crate::error::CliError;
use crate::output;
use demanda::prelude::*;
use std::result::Result;
use std::path::Path;

pub(crate) fn run(
    file: &Path,
    seed: &TowerVector,
    json: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let store = DemandStore::open(file)?;
    let forecast = forecast_next_day(store.rows(), seed)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&forecast)?);
        return Ok(());
    }

    if !quiet {
        output::section("Next-day forecast");
    }
    output::kv(
        &format!("Day {} predicted demand", forecast.day),
        forecast.predicted_demand,
    );
    output::kv(
        &format!("Day {} predicted bandwidth", forecast.day),
        forecast.bandwidth,
    );
    output::tower_lines(&forecast.bandwidth);
    Ok(())
}
