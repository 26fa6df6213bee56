//! Current command: bandwidth as of the last stored day.

use super::BandwidthReport;
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
    let (day, bandwidth) = current_bandwidth(store.rows(), seed)?;

    if json {
        let report = BandwidthReport { day, bandwidth };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if !quiet {
        output::section("Current bandwidth");
    }
    output::kv(&format!("Day {day}"), bandwidth);
    output::tower_lines(&bandwidth);
    Ok(())
}
