//! Demanda: daily bandwidth-demand tracking for a three-tower site.
//!
//! A CSV-backed table of per-day demand percentages feeds a
//! per-tower compounding recurrence (each day multiplies bandwidth by
//! `1 + demand`) and an OLS trend forecast of the next day's demand.
//! Control flows one way: the store feeds the engine, never the other
//! way around.
//!
//! # Quick Start
//!
//! ```
//! use demanda::prelude::*;
//!
//! let rows = vec![
//!     TowerVector::new(0.1, 0.2, 0.3),
//!     TowerVector::new(0.2, 0.1, 0.0),
//! ];
//! let seed = TowerVector::splat(1.0);
//!
//! // Day 1 is the seed; day 2 compounds by day 2's demand.
//! let day2 = compute_bandwidth(&rows, 2, &seed).unwrap();
//! assert!(day2.approx_eq(&TowerVector::new(1.2, 1.1, 1.0), 1e-6));
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: `Tower` and the fixed three-lane `TowerVector`
//! - [`store`]: the CSV-backed `DemandStore` (append/delete/edit by day)
//! - [`linear_model`]: single-feature OLS `LinearRegression`
//! - [`recurrence`]: the bandwidth recurrence engine and forecaster
//! - [`error`]: `DemandaError` and the crate `Result` alias

pub mod error;
pub mod linear_model;
pub mod prelude;
pub mod primitives;
pub mod recurrence;
pub mod store;
