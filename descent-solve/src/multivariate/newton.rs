//! Newton's method with backtracking step control.

use descent_core::{Observer, vector};

use super::{Action, Config, Error, Event, Solution, Status, evaluate, should_stop, start};

/// Sufficient-decrease constant for the Armijo condition.
const ARMIJO_C1: f64 = 1e-4;

/// Factor applied to the step on each backtrack.
const BACKTRACK_FACTOR: f64 = 0.5;

/// Maximum number of backtracks per iteration.
const MAX_BACKTRACKS: usize = 50;

/// Minimizes `objective` from `initial` using Newton's method.
///
/// The direction is the normalized Newton step `H⁻¹ · (−∇f)`, falling back to
/// the normalized antigradient when the Newton step does not descend. The
/// step starts at the length of the Newton step and is halved until the
/// Armijo condition `f(x + αd) ≤ f(x) + c₁·α·∇f·d` holds.
///
/// Converges when the gradient norm drops to `epsilon`.
///
/// # Errors
///
/// Returns an error if `initial` is empty, the objective produces a
/// non-finite value, or the Hessian is singular.
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
    let differencing = config.differencing();

    for iter in 1..=config.max_iters() {
        let gradient = differencing.gradient(&objective, &x);
        if vector::norm(&gradient) <= config.epsilon() {
            return Ok(Solution::new(Status::Converged, x, value, iter - 1));
        }
        let antigradient: Vec<f64> = gradient.iter().map(|g| -g).collect();

        let hessian = differencing.hessian(&objective, &x)?;
        let mut direction = hessian.inverse()?.try_mul_vector(&antigradient)?;
        if vector::dot(&direction, &gradient)? >= 0.0 {
            tracing::debug!(iter, "newton step is not a descent direction");
            direction = antigradient;
        }
        let mut step = vector::norm(&direction);
        vector::normalize(&mut direction)?;

        let slope = vector::dot(&gradient, &direction)?;
        let mut trial = vector::add_scaled(&x, step, &direction)?;
        let mut trial_value = evaluate(&objective, &trial)?;
        let mut backtracks = 0;
        while trial_value > value + ARMIJO_C1 * step * slope {
            if backtracks == MAX_BACKTRACKS {
                tracing::warn!(iter, step, "backtracking did not reach sufficient decrease");
                break;
            }
            backtracks += 1;
            step *= BACKTRACK_FACTOR;
            trial = vector::add_scaled(&x, step, &direction)?;
            trial_value = evaluate(&objective, &trial)?;
        }
        tracing::trace!(iter, step, backtracks, "backtracking done");

        x = trial;
        value = trial_value;

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

/// Minimizes `objective` using Newton's method without observation.
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
