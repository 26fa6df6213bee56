//! Linear models for regression.
//!
//! Single-feature Ordinary Least Squares (OLS), used to fit a trend
//! line over (day index, demand percentage) pairs.

use crate::error::{DemandaError, Result};

/// Ordinary Least Squares (OLS) linear regression over one feature.
///
/// Fits `y = slope * x + intercept` by minimizing the residual sum of
/// squares. With a single feature the normal equations collapse to the
/// closed form
///
/// ```text
/// slope     = Σ(x - x̄)(y - ȳ) / Σ(x - x̄)²
/// intercept = ȳ - slope · x̄
/// ```
///
/// # Examples
///
/// ```
/// use demanda::linear_model::LinearRegression;
///
/// // y = 2x + 1
/// let x = [1.0, 2.0, 3.0, 4.0];
/// let y = [3.0, 5.0, 7.0, 9.0];
///
/// let mut model = LinearRegression::new();
/// model.fit(&x, &y).unwrap();
///
/// assert!((model.predict(5.0) - 11.0).abs() < 1e-4);
/// assert!(model.score(&x, &y) > 0.99);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LinearRegression {
    /// Fitted slope; `None` until [`fit`](Self::fit) succeeds.
    slope: Option<f32>,
    /// Intercept (bias) term.
    intercept: f32,
}

impl LinearRegression {
    /// Creates a new unfitted `LinearRegression`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the model has been fitted.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.slope.is_some()
    }

    /// Returns the fitted slope.
    ///
    /// # Panics
    ///
    /// Panics if the model is not fitted.
    #[must_use]
    pub fn slope(&self) -> f32 {
        self.slope.expect("Model not fitted. Call fit() first.")
    }

    /// Returns the intercept term.
    #[must_use]
    pub fn intercept(&self) -> f32 {
        self.intercept
    }

    /// Fits the model to `(x, y)` samples.
    ///
    /// # Errors
    ///
    /// - [`DemandaError::InsufficientData`] with fewer than 2 samples
    ///   (a line through less than two points is degenerate).
    /// - Dimension mismatch when `x` and `y` differ in length.
    /// - Zero variance in `x` (a vertical line has no OLS solution).
    pub fn fit(&mut self, x: &[f32], y: &[f32]) -> Result<()> {
        if x.len() != y.len() {
            return Err(DemandaError::dimension_mismatch(
                "samples",
                x.len(),
                y.len(),
            ));
        }
        if x.len() < 2 {
            return Err(DemandaError::InsufficientData {
                rows: x.len(),
                required: 2,
            });
        }

        let n = x.len() as f32;
        let x_mean = x.iter().sum::<f32>() / n;
        let y_mean = y.iter().sum::<f32>() / n;

        let ss_xy: f32 = x
            .iter()
            .zip(y.iter())
            .map(|(xi, yi)| (xi - x_mean) * (yi - y_mean))
            .sum();
        let ss_xx: f32 = x.iter().map(|xi| (xi - x_mean).powi(2)).sum();

        if ss_xx == 0.0 {
            return Err("zero variance in x, cannot fit a line".into());
        }

        let slope = ss_xy / ss_xx;
        self.intercept = y_mean - slope * x_mean;
        self.slope = Some(slope);
        Ok(())
    }

    /// Predicts the target value for a single input.
    ///
    /// # Panics
    ///
    /// Panics if the model is not fitted.
    #[must_use]
    pub fn predict(&self, x: f32) -> f32 {
        let slope = self.slope.expect("Model not fitted. Call fit() first.");
        slope * x + self.intercept
    }

    /// Computes the R² score over `(x, y)` samples.
    ///
    /// # Panics
    ///
    /// Panics if the model is not fitted or the lengths differ.
    #[must_use]
    pub fn score(&self, x: &[f32], y: &[f32]) -> f32 {
        let y_pred: Vec<f32> = x.iter().map(|&xi| self.predict(xi)).collect();
        r_squared(&y_pred, y)
    }
}

/// Computes the coefficient of determination (R²).
///
/// R² = 1 - (`SS_res` / `SS_tot`). Returns 0.0 for a constant target
/// (zero total sum of squares).
///
/// # Examples
///
/// ```
/// use demanda::linear_model::r_squared;
///
/// let y_true = [3.0, -0.5, 2.0, 7.0];
/// let y_pred = [2.5, 0.0, 2.0, 8.0];
/// assert!(r_squared(&y_pred, &y_true) > 0.9);
/// ```
///
/// # Panics
///
/// Panics if the slices have different lengths.
#[must_use]
pub fn r_squared(y_pred: &[f32], y_true: &[f32]) -> f32 {
    assert_eq!(y_pred.len(), y_true.len(), "Slices must have same length");

    let y_mean = y_true.iter().sum::<f32>() / y_true.len() as f32;

    let ss_res: f32 = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(t, p)| (t - p).powi(2))
        .sum();
    let ss_tot: f32 = y_true.iter().map(|t| (t - y_mean).powi(2)).sum();

    if ss_tot == 0.0 {
        return 0.0;
    }

    1.0 - (ss_res / ss_tot)
}
