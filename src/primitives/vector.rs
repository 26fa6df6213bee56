//! Fixed three-lane vector keyed by tower.

use super::Tower;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// A fixed-width vector of one `f32` per tower.
///
/// Used both for a single day's demand percentages and for the
/// accumulated bandwidth figures; the two roles share arithmetic but
/// not units, so callers go through the [`DemandRow`] and
/// [`BandwidthVector`] aliases.
///
/// # Examples
///
/// ```
/// use demanda::primitives::{Tower, TowerVector};
///
/// let v = TowerVector::new(0.1, 0.2, 0.3);
/// assert_eq!(v[Tower::B], 0.2);
/// assert!(v.is_fraction());
/// ```
///
/// [`DemandRow`]: super::DemandRow
/// [`BandwidthVector`]: super::BandwidthVector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TowerVector([f32; 3]);

impl TowerVector {
    /// Creates a vector from per-tower values in column order.
    #[must_use]
    pub fn new(a: f32, b: f32, c: f32) -> Self {
        Self([a, b, c])
    }

    /// Creates a vector with the same value in every lane.
    #[must_use]
    pub fn splat(value: f32) -> Self {
        Self([value; 3])
    }

    /// Creates a vector from a three-element slice.
    ///
    /// # Errors
    ///
    /// Returns an error if the slice length is not 3.
    pub fn from_slice(values: &[f32]) -> Result<Self, &'static str> {
        if values.len() != 3 {
            return Err("TowerVector requires exactly 3 values");
        }
        Ok(Self([values[0], values[1], values[2]]))
    }

    /// Returns the lane for `tower`.
    #[must_use]
    pub fn get(&self, tower: Tower) -> f32 {
        self.0[tower.index()]
    }

    /// Sets the lane for `tower`.
    pub fn set(&mut self, tower: Tower, value: f32) {
        self.0[tower.index()] = value;
    }

    /// Returns the lanes as an array in column order.
    #[must_use]
    pub fn as_array(&self) -> [f32; 3] {
        self.0
    }

    /// Applies `f` to every lane.
    #[must_use]
    pub fn map(&self, f: impl Fn(f32) -> f32) -> Self {
        Self([f(self.0[0]), f(self.0[1]), f(self.0[2])])
    }

    /// Combines two vectors lane by lane.
    #[must_use]
    pub fn zip_map(&self, other: &Self, f: impl Fn(f32, f32) -> f32) -> Self {
        Self([
            f(self.0[0], other.0[0]),
            f(self.0[1], other.0[1]),
            f(self.0[2], other.0[2]),
        ])
    }

    /// True when every lane lies in [0, 1].
    #[must_use]
    pub fn is_fraction(&self) -> bool {
        self.0.iter().all(|v| (0.0..=1.0).contains(v))
    }

    /// Lane-wise approximate equality within `tolerance`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f32) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

impl Index<Tower> for TowerVector {
    type Output = f32;

    fn index(&self, tower: Tower) -> &f32 {
        &self.0[tower.index()]
    }
}

impl IndexMut<Tower> for TowerVector {
    fn index_mut(&mut self, tower: Tower) -> &mut f32 {
        &mut self.0[tower.index()]
    }
}

impl fmt::Display for TowerVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.0[0], self.0[1], self.0[2])
    }
}
