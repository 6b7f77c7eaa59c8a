//! Parallel tangents (PARTAN).
//!
//! Each outer iteration takes one antigradient step per dimension, then an
//! acceleration step along the net displacement of those steps. On a
//! quadratic the acceleration direction points toward the center of the
//! level sets, which shortcuts the zigzag of plain steepest descent.

use descent_core::{Observer, vector};

use super::{
    Action, Config, Error, Event, Solution, Status, evaluate, should_stop, start, step_along,
};

/// Minimizes `objective` from `initial` using PARTAN.
///
/// Converges when the gradient norm or the acceleration direction norm drops
/// to `epsilon`. The solution's `iters` counts antigradient steps and
/// `acceleration_iters` counts acceleration steps; the iteration cap applies
/// to outer iterations.
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
    let differencing = config.differencing();
    let epsilon = config.epsilon();

    let mut descent_steps = 0;
    let mut acceleration_steps = 0;
    for iter in 1..=config.max_iters() {
        let anchor = x.clone();

        for _ in 0..x.len() {
            let antigradient = differencing.antigradient(&objective, &x);
            if vector::norm(&antigradient) <= epsilon {
                let value = evaluate(&objective, &x)?;
                return Ok(finish(
                    Status::Converged,
                    x,
                    value,
                    descent_steps,
                    acceleration_steps,
                ));
            }
            step_along(&objective, &mut x, &antigradient, config)?;
            descent_steps += 1;
        }

        let acceleration = vector::sub(&x, &anchor)?;
        if vector::norm(&acceleration) <= epsilon {
            let value = evaluate(&objective, &x)?;
            return Ok(finish(
                Status::Converged,
                x,
                value,
                descent_steps,
                acceleration_steps,
            ));
        }

        let step = step_along(&objective, &mut x, &acceleration, config)?;
        acceleration_steps += 1;
        value = evaluate(&objective, &x)?;

        let event = Event {
            iter,
            x: &x,
            objective: value,
            direction: &acceleration,
            step,
        };
        if should_stop(&mut observer, &event) {
            return Ok(finish(
                Status::StoppedByObserver,
                x,
                value,
                descent_steps,
                acceleration_steps,
            ));
        }
    }

    Ok(finish(
        Status::MaxIters,
        x,
        value,
        descent_steps,
        acceleration_steps,
    ))
}

fn finish(
    status: Status,
    x: Vec<f64>,
    value: f64,
    descent_steps: usize,
    acceleration_steps: usize,
) -> Solution {
    Solution::new(status, x, value, descent_steps).with_acceleration(acceleration_steps)
}

/// Minimizes `objective` using PARTAN without observation.
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
