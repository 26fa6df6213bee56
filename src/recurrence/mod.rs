//! Bandwidth recurrence engine.
//!
//! Evolves a per-tower bandwidth vector from a day-1 seed by one
//! compounding step per stored day, and forecasts the next day by
//! fitting an independent demand trend line per tower. Each tower's
//! lane is independent; there is no cross-tower coupling.

use crate::error::{DemandaError, Result};
use crate::linear_model::LinearRegression;
use crate::primitives::{BandwidthVector, DemandRow, Tower, TowerVector};
use serde::Serialize;

/// Computes the bandwidth vector as of `target_day` from a day-1 seed.
///
/// Day 1 is the seed itself; every later day `d` multiplies each lane
/// by `1 + demand` where `demand` is day `d`'s percentage for that
/// tower:
///
/// ```text
/// bandwidth[tower] *= 1 + rows[d - 1][tower]    for d in 2..=target_day
/// ```
///
/// # Errors
///
/// Returns [`DemandaError::InvalidDay`] when `target_day` is 0 or past
/// the stored range (`target_day > rows.len()` for any day other than
/// day 1, which needs no stored rows).
///
/// # Examples
///
/// ```
/// use demanda::prelude::*;
///
/// let rows = vec![
///     TowerVector::new(0.1, 0.2, 0.3),
///     TowerVector::new(0.2, 0.1, 0.0),
/// ];
/// let seed = TowerVector::splat(1.0);
///
/// let day2 = compute_bandwidth(&rows, 2, &seed)?;
/// assert!(day2.approx_eq(&TowerVector::new(1.2, 1.1, 1.0), 1e-6));
/// # Ok::<(), DemandaError>(())
/// ```
pub fn compute_bandwidth(
    rows: &[DemandRow],
    target_day: usize,
    seed: &BandwidthVector,
) -> Result<BandwidthVector> {
    if target_day == 0 || (target_day > 1 && target_day > rows.len()) {
        return Err(DemandaError::InvalidDay {
            day: target_day,
            len: rows.len(),
        });
    }

    let mut bandwidth = *seed;
    for day in 2..=target_day {
        // rows is 0-indexed, so day d's demand sits at rows[d - 1].
        bandwidth = bandwidth.zip_map(&rows[day - 1], |b, demand| b * (1.0 + demand));
    }
    Ok(bandwidth)
}

/// Bandwidth as of the last stored day.
///
/// An empty table reports day 1 with the seed unchanged; otherwise the
/// current day is `rows.len()`. Returns `(day, bandwidth)`.
///
/// # Errors
///
/// Infallible in practice (the day is always in range); kept as a
/// `Result` for a uniform engine surface.
pub fn current_bandwidth(
    rows: &[DemandRow],
    seed: &BandwidthVector,
) -> Result<(usize, BandwidthVector)> {
    let day = rows.len().max(1);
    let bandwidth = compute_bandwidth(rows, day, seed)?;
    Ok((day, bandwidth))
}

/// A next-day forecast: trend-predicted demand and the bandwidth one
/// recurrence step past the last stored day.
#[derive(Debug, Clone, Serialize)]
pub struct Forecast {
    /// The forecast day (`rows.len() + 1`).
    pub day: usize,
    /// Trend-line demand prediction per tower, clamped to [0, 1].
    pub predicted_demand: TowerVector,
    /// Bandwidth after applying the predicted demand to the last
    /// stored day's bandwidth.
    pub bandwidth: BandwidthVector,
}

/// Forecasts demand and bandwidth for day `rows.len() + 1`.
///
/// Fits an independent OLS trend per tower over (day index, historical
/// percentage) pairs, predicts each tower's demand for the next day
/// (clamped to [0, 1]; the growth recurrence assumes non-negative
/// demand), then applies one compounding step to the last stored day's
/// bandwidth.
///
/// # Errors
///
/// Returns [`DemandaError::InsufficientData`] with fewer than 2 stored
/// rows; a trend over less than two days is degenerate.
///
/// # Examples
///
/// ```
/// use demanda::prelude::*;
///
/// // Demand rising by 0.1 per day on every tower.
/// let rows = vec![
///     TowerVector::splat(0.1),
///     TowerVector::splat(0.2),
///     TowerVector::splat(0.3),
/// ];
/// let forecast = forecast_next_day(&rows, &TowerVector::splat(1.0))?;
/// assert_eq!(forecast.day, 4);
/// assert!(forecast.predicted_demand.approx_eq(&TowerVector::splat(0.4), 1e-4));
/// # Ok::<(), DemandaError>(())
/// ```
pub fn forecast_next_day(rows: &[DemandRow], seed: &BandwidthVector) -> Result<Forecast> {
    let n = rows.len();
    if n < 2 {
        return Err(DemandaError::InsufficientData {
            rows: n,
            required: 2,
        });
    }

    let days: Vec<f32> = (1..=n).map(|d| d as f32).collect();
    let next_day = (n + 1) as f32;

    let mut predicted = TowerVector::splat(0.0);
    for tower in Tower::ALL {
        let history: Vec<f32> = rows.iter().map(|row| row[tower]).collect();
        let mut model = LinearRegression::new();
        model.fit(&days, &history)?;
        predicted[tower] = model.predict(next_day).clamp(0.0, 1.0);
    }

    let last = compute_bandwidth(rows, n, seed)?;
    let bandwidth = last.zip_map(&predicted, |b, demand| b * (1.0 + demand));

    Ok(Forecast {
        day: n + 1,
        predicted_demand: predicted,
        bandwidth,
    })
}
