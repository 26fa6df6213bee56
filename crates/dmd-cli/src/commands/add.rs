//! Add command: append one day of demand percentages.

use super::{apply_mutation, finish, BandwidthReport};
use crate::error::CliError;
use crate::output;
use demanda::error::DemandaError;
use demanda::prelude::*;
use std::result::Result;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct AddReport {
    day: usize,
    demand: TowerVector,
    current: BandwidthReport,
}

pub(crate) fn run(
    file: &Path,
    seed: &TowerVector,
    row: TowerVector,
    json: bool,
    quiet: bool,
) -> Result<(), CliError> {
    // The only command that initializes a missing table; everything
    // else is meaningless without data.
    let mut store = match DemandStore::open(file) {
        Ok(store) => store,
        Err(DemandaError::StoreNotFound(_)) => {
            output::warning(&format!(
                "{} not found, starting a new table",
                file.display()
            ));
            DemandStore::create(file)?
        }
        Err(e) => return Err(e.into()),
    };

    let (_, persist_err) = apply_mutation(store.append(row))?;
    let day = store.len();
    let (cur_day, bandwidth) = current_bandwidth(store.rows(), seed)?;

    if json {
        let report = AddReport {
            day,
            demand: row,
            current: BandwidthReport {
                day: cur_day,
                bandwidth,
            },
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return finish(persist_err);
    }

    if !quiet {
        output::section("Add day");
    }
    output::success(&format!("Recorded day {day}: demand {row}"));
    output::kv(&format!("Day {cur_day} bandwidth"), bandwidth);
    output::tower_lines(&bandwidth);
    finish(persist_err)
}
