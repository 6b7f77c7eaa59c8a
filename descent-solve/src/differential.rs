//! Finite-difference derivative estimates of a multivariate objective.
//!
//! The canonical first derivative is the asymmetric three-point estimator
//!
//! ```text
//! (f(x - εeᵢ) - 4 f(x) + 3 f(x + εeᵢ)) / (2ε)
//! ```
//!
//! which is biased by `ε·∂²f/∂xᵢ²`. The plain symmetric central difference is
//! available as [`Differencing::symmetric_first_derivative`] for comparison.

use thiserror::Error;

use descent_core::Matrix;

/// Errors that can occur when validating a [`Differencing`] config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("gradient_step must be finite and positive")]
    GradientStep,

    #[error("hessian_step must be finite and positive")]
    HessianStep,
}

/// Step sizes used by the finite-difference estimates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Differencing {
    gradient_step: f64,
    hessian_step: f64,
}

impl Default for Differencing {
    fn default() -> Self {
        Self {
            gradient_step: 1e-6,
            hessian_step: 1e-4,
        }
    }
}

impl Differencing {
    /// Creates a config with validated step sizes.
    ///
    /// # Errors
    ///
    /// Returns an error if either step is non-positive or non-finite.
    pub fn new(gradient_step: f64, hessian_step: f64) -> Result<Self, ConfigError> {
        if !gradient_step.is_finite() || gradient_step <= 0.0 {
            return Err(ConfigError::GradientStep);
        }
        if !hessian_step.is_finite() || hessian_step <= 0.0 {
            return Err(ConfigError::HessianStep);
        }
        Ok(Self {
            gradient_step,
            hessian_step,
        })
    }

    /// Returns the step used for first derivatives.
    #[must_use]
    pub fn gradient_step(&self) -> f64 {
        self.gradient_step
    }

    /// Returns the step used for second derivatives.
    #[must_use]
    pub fn hessian_step(&self) -> f64 {
        self.hessian_step
    }

    /// Estimates `∂f/∂xᵢ` at `x` with the asymmetric three-point formula.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds for `x`.
    pub fn first_derivative<F>(&self, f: &F, x: &[f64], i: usize) -> f64
    where
        F: Fn(&[f64]) -> f64,
    {
        let eps = self.gradient_step;
        let mut probe = x.to_vec();

        probe[i] = x[i] - eps;
        let below = f(&probe);
        probe[i] = x[i] + eps;
        let above = f(&probe);

        (below - 4.0 * f(x) + 3.0 * above) / (2.0 * eps)
    }

    /// Estimates `∂f/∂xᵢ` at `x` with the symmetric central difference.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds for `x`.
    pub fn symmetric_first_derivative<F>(&self, f: &F, x: &[f64], i: usize) -> f64
    where
        F: Fn(&[f64]) -> f64,
    {
        let eps = self.gradient_step;
        let mut probe = x.to_vec();

        probe[i] = x[i] + eps;
        let above = f(&probe);
        probe[i] = x[i] - eps;
        let below = f(&probe);

        (above - below) / (2.0 * eps)
    }

    /// Estimates `∂²f/∂xᵢ∂xⱼ` at `x` with the four-point formula.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of bounds for `x`.
    pub fn second_derivative<F>(&self, f: &F, x: &[f64], i: usize, j: usize) -> f64
    where
        F: Fn(&[f64]) -> f64,
    {
        let eps = self.hessian_step;
        let mut probe = x.to_vec();
        let mut at = |di: f64, dj: f64| {
            probe.copy_from_slice(x);
            probe[i] += di;
            probe[j] += dj;
            f(&probe)
        };

        let pp = at(eps, eps);
        let pm = at(eps, -eps);
        let mp = at(-eps, eps);
        let mm = at(-eps, -eps);

        (pp - pm - mp + mm) / (4.0 * eps * eps)
    }

    /// Estimates the gradient of `f` at `x`.
    pub fn gradient<F>(&self, f: &F, x: &[f64]) -> Vec<f64>
    where
        F: Fn(&[f64]) -> f64,
    {
        (0..x.len()).map(|i| self.first_derivative(f, x, i)).collect()
    }

    /// Estimates the antigradient (negated gradient) of `f` at `x`.
    pub fn antigradient<F>(&self, f: &F, x: &[f64]) -> Vec<f64>
    where
        F: Fn(&[f64]) -> f64,
    {
        self.gradient(f, x).into_iter().map(|g| -g).collect()
    }

    /// Estimates the Hessian of `f` at `x`.
    ///
    /// Only the upper triangle is evaluated; the lower triangle mirrors it.
    ///
    /// # Errors
    ///
    /// Returns an error if `x` is empty.
    pub fn hessian<F>(&self, f: &F, x: &[f64]) -> Result<Matrix, descent_core::MatrixError>
    where
        F: Fn(&[f64]) -> f64,
    {
        let n = x.len();
        let mut hessian = Matrix::zeros("hessian", n, n)?;
        for i in 0..n {
            for j in i..n {
                let value = self.second_derivative(f, x, i, j);
                hessian[(i, j)] = value;
                hessian[(j, i)] = value;
            }
        }
        Ok(hessian)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn bowl(x: &[f64]) -> f64 {
        x[0] * x[0] + x[1] * x[1]
    }

    fn coupled(x: &[f64]) -> f64 {
        x[0] * x[0] * x[1] + 3.0 * x[0] * x[1] + x[1].powi(3)
    }

    #[test]
    fn gradient_of_bowl() {
        let diff = Differencing::default();
        let gradient = diff.gradient(&bowl, &[1.0, 1.0]);

        assert_abs_diff_eq!(gradient[0], 2.0, epsilon = 1e-3);
        assert_abs_diff_eq!(gradient[1], 2.0, epsilon = 1e-3);

        let antigradient = diff.antigradient(&bowl, &[1.0, 1.0]);
        assert_abs_diff_eq!(antigradient[0], -2.0, epsilon = 1e-3);
        assert_abs_diff_eq!(antigradient[1], -2.0, epsilon = 1e-3);
    }

    #[test]
    fn asymmetric_estimator_carries_curvature_bias() {
        // For x², the asymmetric estimate is 2x + ε·2 up to rounding.
        let diff = Differencing::new(1e-3, 1e-4).unwrap();
        let square = |x: &[f64]| x[0] * x[0];

        assert_relative_eq!(diff.first_derivative(&square, &[1.5], 0), 3.002, epsilon = 1e-9);
        assert_relative_eq!(
            diff.symmetric_first_derivative(&square, &[1.5], 0),
            3.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn symmetric_and_asymmetric_estimators_agree() {
        let diff = Differencing::default();
        let x = [0.7, -1.3];
        for i in 0..2 {
            let asymmetric = diff.first_derivative(&coupled, &x, i);
            let symmetric = diff.symmetric_first_derivative(&coupled, &x, i);
            assert_abs_diff_eq!(asymmetric, symmetric, epsilon = 1e-4);
        }
    }

    #[test]
    fn hessian_is_symmetric_and_accurate() {
        let diff = Differencing::default();
        let x = [0.5, 2.0];
        let hessian = diff.hessian(&coupled, &x).unwrap();

        // ∂²/∂x² = 2y, ∂²/∂x∂y = 2x + 3, ∂²/∂y² = 6y
        assert_abs_diff_eq!(hessian[(0, 0)], 4.0, epsilon = 1e-4);
        assert_abs_diff_eq!(hessian[(0, 1)], 4.0, epsilon = 1e-4);
        assert_abs_diff_eq!(hessian[(1, 1)], 12.0, epsilon = 1e-4);
        assert!(hessian.try_eq(&hessian.transpose()).unwrap());
    }

    #[test]
    fn hessian_of_empty_point_fails() {
        let diff = Differencing::default();
        assert!(diff.hessian(&|_: &[f64]| 0.0, &[]).is_err());
    }

    #[test]
    fn rejects_invalid_steps() {
        assert_eq!(Differencing::new(0.0, 1e-4), Err(ConfigError::GradientStep));
        assert_eq!(Differencing::new(1e-6, f64::NAN), Err(ConfigError::HessianStep));
    }
}
