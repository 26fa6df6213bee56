//! Property tests for the bandwidth recurrence engine.

use demanda::prelude::*;
use proptest::prelude::*;

fn demand_row() -> impl Strategy<Value = TowerVector> {
    (0.0f32..=1.0, 0.0f32..=1.0, 0.0f32..=1.0).prop_map(|(a, b, c)| TowerVector::new(a, b, c))
}

fn demand_table() -> impl Strategy<Value = Vec<TowerVector>> {
    prop::collection::vec(demand_row(), 0..12)
}

fn seed_vector() -> impl Strategy<Value = TowerVector> {
    (0.1f32..10.0, 0.1f32..10.0, 0.1f32..10.0).prop_map(|(a, b, c)| TowerVector::new(a, b, c))
}

proptest! {
    #[test]
    fn day_one_is_identity(rows in demand_table(), seed in seed_vector()) {
        let out = compute_bandwidth(&rows, 1, &seed).unwrap();
        prop_assert!(out.approx_eq(&seed, 0.0));
    }

    #[test]
    fn iterative_matches_closed_form_product(
        rows in prop::collection::vec(demand_row(), 1..12),
        seed in seed_vector(),
    ) {
        let day = rows.len();
        let out = compute_bandwidth(&rows, day, &seed).unwrap();

        for tower in Tower::ALL {
            let product: f32 = rows[1..day]
                .iter()
                .map(|row| 1.0 + row[tower])
                .product();
            let expected = seed[tower] * product;
            let tolerance = expected.abs().max(1.0) * 1e-4;
            prop_assert!((out[tower] - expected).abs() <= tolerance);
        }
    }

    #[test]
    fn bandwidth_never_shrinks(
        rows in prop::collection::vec(demand_row(), 1..12),
        seed in seed_vector(),
    ) {
        // Non-negative demand compounds growth only.
        let mut previous = seed;
        for day in 1..=rows.len() {
            let out = compute_bandwidth(&rows, day, &seed).unwrap();
            for tower in Tower::ALL {
                prop_assert!(out[tower] >= previous[tower] * (1.0 - 1e-5));
            }
            previous = out;
        }
    }

    #[test]
    fn day_past_range_always_rejected(
        rows in demand_table(),
        seed in seed_vector(),
        extra in 1usize..5,
    ) {
        let day = rows.len().max(1) + extra;
        let result = compute_bandwidth(&rows, day, &seed);
        let is_invalid_day = matches!(result, Err(DemandaError::InvalidDay { .. }));
        prop_assert!(is_invalid_day, "expected InvalidDay, got {:?}", result);
    }

    #[test]
    fn forecast_demand_stays_in_bounds(
        rows in prop::collection::vec(demand_row(), 2..12),
        seed in seed_vector(),
    ) {
        let forecast = forecast_next_day(&rows, &seed).unwrap();
        prop_assert_eq!(forecast.day, rows.len() + 1);
        prop_assert!(forecast.predicted_demand.is_fraction());
    }
}

#[test]
fn spec_scenario_two_days() {
    let rows = vec![
        TowerVector::new(0.1, 0.2, 0.3),
        TowerVector::new(0.2, 0.1, 0.0),
    ];
    let seed = TowerVector::splat(1.0);
    let out = compute_bandwidth(&rows, 2, &seed).unwrap();
    assert!(out.approx_eq(&TowerVector::new(1.2, 1.1, 1.0), 1e-6));
}

#[test]
fn forecast_rejects_short_history() {
    let seed = TowerVector::splat(1.0);
    assert!(matches!(
        forecast_next_day(&[], &seed),
        Err(DemandaError::InsufficientData { rows: 0, required: 2 })
    ));
    assert!(matches!(
        forecast_next_day(&[TowerVector::splat(0.5)], &seed),
        Err(DemandaError::InsufficientData { rows: 1, required: 2 })
    ));
}
