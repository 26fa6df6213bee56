//! Core value types (Tower, TowerVector).
//!
//! These types carry all per-tower data through the store and the
//! recurrence engine.

mod tower;
mod vector;

pub use tower::Tower;
pub use vector::TowerVector;

/// One day's demand percentages, one lane per tower, each in [0, 1].
pub type DemandRow = TowerVector;

/// Accumulated bandwidth per tower, seeded at day 1 and evolved by the
/// recurrence.
pub type BandwidthVector = TowerVector;
