//! Nonlinear conjugate gradient with Daniel's β.
//!
//! Daniel's formula `β = ∇f₊ᵀ H d / dᵀ H d` needs the Hessian along the
//! previous direction. Here `H d` is replaced by the gradient change over the
//! step, which is proportional to it on a quadratic:
//!
//! ```text
//! β = ∇f₊ᵀ Δg / dᵀ Δg
//! d₊ = −∇f₊ + β d
//! ```

use descent_core::{Observer, vector};

use super::{
    Action, Config, Error, Event, Solution, Status, evaluate, should_stop, start, step_along,
};

/// Relative size below which `dᵀ Δg` is treated as zero.
const DEGENERATE: f64 = 1e-12;

/// Minimizes `objective` from `initial` using conjugate gradients.
///
/// The direction restarts from the antigradient every `n` iterations, where
/// `n` is the dimension, and whenever the conjugate direction would not
/// descend. Converges when the gradient norm drops to `epsilon`.
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

    let mut gradient = differencing.gradient(&objective, &x);
    let mut direction: Vec<f64> = gradient.iter().map(|g| -g).collect();

    for iter in 1..=config.max_iters() {
        if vector::norm(&gradient) <= config.epsilon() {
            return Ok(Solution::new(Status::Converged, x, value, iter - 1));
        }

        let step = step_along(&objective, &mut x, &direction, config)?;
        value = evaluate(&objective, &x)?;

        let next_gradient = differencing.gradient(&objective, &x);
        let dg = vector::sub(&next_gradient, &gradient)?;
        gradient = next_gradient;

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

        let beta = if iter % n == 0 {
            0.0
        } else {
            daniel_beta(&gradient, &direction, &dg)?
        };
        let antigradient: Vec<f64> = gradient.iter().map(|g| -g).collect();
        let next_direction = vector::add_scaled(&antigradient, beta, &direction)?;

        direction = if vector::dot(&next_direction, &gradient)? < 0.0 {
            next_direction
        } else {
            tracing::warn!(iter, beta, "conjugate direction lost descent, restarting");
            antigradient
        };
    }

    Ok(Solution::new(Status::MaxIters, x, value, config.max_iters()))
}

/// Returns `∇f₊ᵀ Δg / dᵀ Δg`, or zero when the denominator degenerates.
fn daniel_beta(gradient: &[f64], direction: &[f64], dg: &[f64]) -> Result<f64, Error> {
    let denominator = vector::dot(direction, dg)?;
    let scale = vector::norm(direction) * vector::norm(dg);
    if denominator == 0.0 || denominator.abs() <= DEGENERATE * scale {
        tracing::warn!(denominator, "degenerate conjugate update, restarting");
        return Ok(0.0);
    }
    Ok(vector::dot(gradient, dg)? / denominator)
}

/// Minimizes `objective` using conjugate gradients without observation.
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
