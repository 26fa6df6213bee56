//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use demanda::prelude::*;
//! ```

pub use crate::error::{DemandaError, Result};
pub use crate::linear_model::LinearRegression;
pub use crate::primitives::{BandwidthVector, DemandRow, Tower, TowerVector};
pub use crate::recurrence::{compute_bandwidth, current_bandwidth, forecast_next_day, Forecast};
pub use crate::store::DemandStore;
