//! Reduction of a multivariate objective to a function of one step length.
//!
//! A [`Ray`] captures the base point, the direction and the objective, so the
//! one-dimensional searches see an ordinary `Fn(f64) -> f64` with no hidden
//! shared state. Drivers build a fresh ray for every step.

use descent_core::vector::VectorError;

/// Writes `base + alpha * direction` into `dst`.
///
/// # Errors
///
/// Returns [`VectorError::DimensionMismatch`] if `direction` or `dst` differ in
/// length from `base`.
pub fn convert_dimensions(
    alpha: f64,
    base: &[f64],
    direction: &[f64],
    dst: &mut [f64],
) -> Result<(), VectorError> {
    for len in [direction.len(), dst.len()] {
        if len != base.len() {
            return Err(VectorError::DimensionMismatch {
                expected: base.len(),
                found: len,
            });
        }
    }

    for ((out, b), d) in dst.iter_mut().zip(base).zip(direction) {
        *out = b + alpha * d;
    }
    Ok(())
}

/// The restriction of an objective to the line `base + alpha * direction`.
pub struct Ray<'a, F> {
    objective: &'a F,
    base: &'a [f64],
    direction: &'a [f64],
}

impl<'a, F> Ray<'a, F>
where
    F: Fn(&[f64]) -> f64,
{
    /// Creates a ray through `base` along `direction`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the lengths differ.
    pub fn new(
        objective: &'a F,
        base: &'a [f64],
        direction: &'a [f64],
    ) -> Result<Self, VectorError> {
        if base.len() != direction.len() {
            return Err(VectorError::DimensionMismatch {
                expected: base.len(),
                found: direction.len(),
            });
        }
        Ok(Self {
            objective,
            base,
            direction,
        })
    }

    /// Returns the base point.
    #[must_use]
    pub fn base(&self) -> &[f64] {
        self.base
    }

    /// Returns the direction.
    #[must_use]
    pub fn direction(&self) -> &[f64] {
        self.direction
    }

    /// Returns the point at step length `alpha`.
    #[must_use]
    pub fn point(&self, alpha: f64) -> Vec<f64> {
        self.base
            .iter()
            .zip(self.direction)
            .map(|(b, d)| b + alpha * d)
            .collect()
    }

    /// Returns the objective value at step length `alpha`.
    pub fn value(&self, alpha: f64) -> f64 {
        (self.objective)(&self.point(alpha))
    }
}
