//! End-to-end store tests through real files.

use demanda::prelude::*;
use demanda::store::HEADER;
use std::fs;
use tempfile::TempDir;

#[test]
fn fresh_store_grows_and_queries() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("demanda.csv");

    let mut store = DemandStore::create(&path).unwrap();
    assert!(store.is_empty());

    let day = store.append(TowerVector::splat(0.5)).unwrap();
    assert_eq!(day, 1);

    // Day 1 bandwidth is the seed regardless of the stored row.
    let seed = TowerVector::new(1.0, 2.0, 3.0);
    let out = compute_bandwidth(store.rows(), 1, &seed).unwrap();
    assert!(out.approx_eq(&seed, 0.0));
}

#[test]
fn every_mutation_is_visible_to_a_fresh_open() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("demanda.csv");

    let mut store = DemandStore::create(&path).unwrap();
    store.append(TowerVector::new(0.1, 0.2, 0.3)).unwrap();
    store.append(TowerVector::new(0.4, 0.5, 0.6)).unwrap();
    store.edit_day(2, TowerVector::new(0.7, 0.8, 0.9)).unwrap();
    store.delete_day(1).unwrap();

    let reopened = DemandStore::open(&path).unwrap();
    assert_eq!(reopened.len(), 1);
    assert!(reopened.rows()[0].approx_eq(&TowerVector::new(0.7, 0.8, 0.9), 1e-6));
}

#[test]
fn file_format_is_three_named_columns() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("demanda.csv");

    let mut store = DemandStore::create(&path).unwrap();
    store.append(TowerVector::new(0.25, 0.5, 0.75)).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some(HEADER));
    assert_eq!(lines.next(), Some("0.25,0.5,0.75"));
    assert_eq!(lines.next(), None);
}

#[test]
fn store_feeds_engine_current_and_forecast() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("demanda.csv");

    let mut store = DemandStore::create(&path).unwrap();
    store.append(TowerVector::splat(0.1)).unwrap();
    store.append(TowerVector::splat(0.2)).unwrap();
    store.append(TowerVector::splat(0.3)).unwrap();

    let seed = TowerVector::splat(1.0);
    let (day, bandwidth) = current_bandwidth(store.rows(), &seed).unwrap();
    assert_eq!(day, 3);
    // seed * 1.2 * 1.3 (day 1's row never enters the product)
    assert!(bandwidth.approx_eq(&TowerVector::splat(1.56), 1e-4));

    let forecast = forecast_next_day(store.rows(), &seed).unwrap();
    assert_eq!(forecast.day, 4);
    assert!(forecast
        .predicted_demand
        .approx_eq(&TowerVector::splat(0.4), 1e-4));
    assert!(forecast
        .bandwidth
        .approx_eq(&bandwidth.map(|b| b * 1.4), 1e-3));
}

#[test]
fn failed_rewrite_keeps_memory_authoritative() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("demanda.csv");

    let mut store = DemandStore::create(&path).unwrap();
    store.append(TowerVector::splat(0.1)).unwrap();

    // Make the rewrite impossible: the backing path becomes a directory.
    fs::remove_file(&path).unwrap();
    fs::create_dir(&path).unwrap();

    let result = store.append(TowerVector::splat(0.2));
    match result {
        Err(DemandaError::Persistence { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected Persistence, got {other:?}"),
    }

    // Memory kept the append and still feeds the engine.
    assert_eq!(store.len(), 2);
    let seed = TowerVector::splat(1.0);
    let (day, bandwidth) = current_bandwidth(store.rows(), &seed).unwrap();
    assert_eq!(day, 2);
    assert!(bandwidth.approx_eq(&TowerVector::splat(1.2), 1e-5));
}

#[test]
fn out_of_range_mutations_never_partially_apply() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("demanda.csv");

    let mut store = DemandStore::create(&path).unwrap();
    store.append(TowerVector::splat(0.5)).unwrap();
    let on_disk_before = fs::read_to_string(&path).unwrap();

    assert!(store.delete_day(2).is_err());
    assert!(store.edit_day(0, TowerVector::splat(0.1)).is_err());

    assert_eq!(store.len(), 1);
    assert_eq!(fs::read_to_string(&path).unwrap(), on_disk_before);
}
