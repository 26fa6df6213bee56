//! Delete command: remove one day; later days shift down.

use super::{apply_mutation, finish, BandwidthReport};
use crate::error::CliError;
use crate::output;
use demanda::prelude::*;
use std::result::Result;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct DeleteReport {
    deleted_day: usize,
    removed: Option<TowerVector>,
    current: BandwidthReport,
}

pub(crate) fn run(
    file: &Path,
    seed: &TowerVector,
    day: usize,
    json: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let mut store = DemandStore::open(file)?;
    let (removed, persist_err) = apply_mutation(store.delete_day(day))?;
    let (cur_day, bandwidth) = current_bandwidth(store.rows(), seed)?;

    if json {
        let report = DeleteReport {
            deleted_day: day,
            removed,
            current: BandwidthReport {
                day: cur_day,
                bandwidth,
            },
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return finish(persist_err);
    }

    if !quiet {
        output::section("Delete day");
    }
    match removed {
        Some(row) => output::success(&format!("Removed day {day}: demand {row}")),
        None => output::success(&format!("Removed day {day}")),
    }
    output::kv(&format!("Day {cur_day} bandwidth"), bandwidth);
    output::tower_lines(&bandwidth);
    finish(persist_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use demanda::error::DemandaError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_delete_out_of_range_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("demanda.csv");
        fs::write(&path, "tower_a,tower_b,tower_c\n0.1,0.2,0.3\n").unwrap();

        let result = run(&path, &TowerVector::splat(1.0), 2, false, true);
        assert!(matches!(
            result,
            Err(CliError::Demanda(DemandaError::InvalidDay {
                day: 2,
                len: 1
            }))
        ));

        // Table untouched.
        let store = DemandStore::open(&path).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("demanda.csv");
        fs::write(
            &path,
            "tower_a,tower_b,tower_c\n0.1,0.1,0.1\n0.2,0.2,0.2\n",
        )
        .unwrap();

        run(&path, &TowerVector::splat(1.0), 1, false, true).unwrap();

        let store = DemandStore::open(&path).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.rows()[0].approx_eq(&TowerVector::splat(0.2), 1e-6));
    }

    #[test]
    fn test_delete_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = run(
            &dir.path().join("nope.csv"),
            &TowerVector::splat(1.0),
            1,
            false,
            true,
        );
        assert!(matches!(result, Err(CliError::StoreNotFound(_))));
    }
}
