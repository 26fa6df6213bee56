//! Query command: bandwidth as of a specific day.

use super::BandwidthReport;
use crate::error::CliError;
use crate::output;
use demanda::prelude::*;
use std::result::Result;
use std::path::Path;

pub(crate) fn run(
    file: &Path,
    seed: &TowerVector,
    day: usize,
    json: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let store = DemandStore::open(file)?;
    let bandwidth = compute_bandwidth(store.rows(), day, seed)?;

    if json {
        let report = BandwidthReport { day, bandwidth };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if !quiet {
        output::section("Bandwidth query");
    }
    output::kv(&format!("Day {day}"), bandwidth);
    output::tower_lines(&bandwidth);
    Ok(())
}
