//! Edit command: replace one day's demand row in place.

use super::{apply_mutation, finish, BandwidthReport};
use crate::error::CliError;
use crate::output;
use demanda::prelude::*;
use std::result::Result;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct EditReport {
    day: usize,
    demand: TowerVector,
    current: BandwidthReport,
}

pub(crate) fn run(
    file: &Path,
    seed: &TowerVector,
    day: usize,
    row: TowerVector,
    json: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let mut store = DemandStore::open(file)?;
    let (_, persist_err) = apply_mutation(store.edit_day(day, row))?;
    let (cur_day, bandwidth) = current_bandwidth(store.rows(), seed)?;

    if json {
        let report = EditReport {
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
        output::section("Edit day");
    }
    output::success(&format!("Day {day} is now demand {row}"));
    output::kv(&format!("Day {cur_day} bandwidth"), bandwidth);
    output::tower_lines(&bandwidth);
    finish(persist_err)
}
