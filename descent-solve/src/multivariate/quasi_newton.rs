//! Quasi-Newton descent with Pearson's rank-one update.
//!
//! An estimate `A` of the inverse Hessian starts at the identity and is
//! corrected after each step so that `A·Δg = Δx`:
//!
//! ```text
//! A ← A + (Δx − A·Δg) Δxᵀ / (Δxᵀ Δg)
//! ```
//!
//! The estimate is reset to the identity every `n` iterations, where `n` is
//! the dimension, and whenever the update or the resulting direction
//! degenerates.

use descent_core::{Matrix, Observer, vector};

use super::{
    Action, Config, Error, Event, Solution, Status, evaluate, should_stop, start, step_along,
};

/// Relative size below which `Δxᵀ Δg` is treated as zero.
const DEGENERATE: f64 = 1e-12;

/// Minimizes `objective` from `initial` using Pearson's quasi-Newton method.
///
/// Converges when the gradient norm drops to `epsilon`.
///
/// # Errors
///
/// Returns an error if `initial` is empty, the objective produces a
/// non-finite value, or a line search fails.
pub fn minimize<F, Obs>(
    objective: F,
    initial: &[f64],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Fn(&[f64]) -> f64,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let (mut x, mut value) = start(&objective, initial)?;
    let n = x.len();
    let differencing = config.differencing();

    let mut inverse = Matrix::identity("A", n)?;
    let mut gradient = differencing.gradient(&objective, &x);

    for iter in 1..=config.max_iters() {
        if vector::norm(&gradient) <= config.epsilon() {
            return Ok(Solution::new(Status::Converged, x, value, iter - 1));
        }

        let mut direction: Vec<f64> = inverse
            .try_mul_vector(&gradient)?
            .into_iter()
            .map(|d| -d)
            .collect();
        if vector::dot(&direction, &gradient)? >= 0.0 {
            tracing::warn!(iter, "inverse Hessian estimate lost descent, restarting");
            inverse = Matrix::identity("A", n)?;
            direction = gradient.iter().map(|g| -g).collect();
        }

        let previous = x.clone();
        let step = step_along(&objective, &mut x, &direction, config)?;
        value = evaluate(&objective, &x)?;

        let next_gradient = differencing.gradient(&objective, &x);
        let dx = vector::sub(&x, &previous)?;
        let dg = vector::sub(&next_gradient, &gradient)?;
        gradient = next_gradient;

        let curvature = vector::dot(&dx, &dg)?;
        if iter % n == 0 {
            inverse = Matrix::identity("A", n)?;
        } else if curvature.abs() <= DEGENERATE * vector::norm(&dx) * vector::norm(&dg)
            || curvature == 0.0
        {
            tracing::warn!(iter, curvature, "degenerate Pearson update, restarting");
            inverse = Matrix::identity("A", n)?;
        } else {
            inverse = pearson_update(&inverse, &dx, &dg, curvature)?;
        }

        let event = Event {
            iter,
            x: &x,
            objective: value,
            direction: &direction,
            step,
        };
        if should_stop(&mut observer, &event) {
            return Ok(Solution::new(Status::StoppedByObserver, x, value, iter));
        }
    }

    Ok(Solution::new(Status::MaxIters, x, value, config.max_iters()))
}

/// Returns `A + (Δx − A·Δg) Δxᵀ / curvature`.
fn pearson_update(
    inverse: &Matrix,
    dx: &[f64],
    dg: &[f64],
    curvature: f64,
) -> Result<Matrix, Error> {
    let residual = vector::sub(dx, &inverse.try_mul_vector(dg)?)?;
    let column = Matrix::from_vector("residual", &residual)?;
    let row = Matrix::from_vector("dx", dx)?.transpose();
    let correction = column.try_mul(&row)?.try_div(curvature)?;
    Ok(inverse.try_add(&correction)?)
}

/// Minimizes `objective` using Pearson's quasi-Newton method without
/// observation.
///
/// # Errors
///
/// See [`minimize`].
pub fn minimize_unobserved<F>(
    objective: F,
    initial: &[f64],
    config: &Config,
) -> Result<Solution, Error>
where
    F: Fn(&[f64]) -> f64,
{
    minimize(objective, initial, config, ())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn update_satisfies_secant_condition() {
        let inverse = Matrix::identity("A", 2).unwrap();
        let dx = [1.0, 0.5];
        let dg = [2.0, 3.0];
        let curvature = vector::dot(&dx, &dg).unwrap();

        let updated = pearson_update(&inverse, &dx, &dg, curvature).unwrap();
        let mapped = updated.try_mul_vector(&dg).unwrap();
        assert_relative_eq!(mapped[0], dx[0], epsilon = 1e-12);
        assert_relative_eq!(mapped[1], dx[1], epsilon = 1e-12);
    }
}
