//! Powell's conjugate direction method.
//!
//! Uses only objective values. The direction set starts as the coordinate
//! axes. Each iteration minimizes along the newest direction, then along
//! every direction in the set. The net displacement of that sweep is
//! conjugate to the newest direction on a quadratic; it replaces the oldest
//! direction in the set.

use std::collections::VecDeque;

use descent_core::{Observer, vector};

use super::{
    Action, Config, Error, Event, Solution, Status, evaluate, should_stop, start, step_along,
};

/// Minimizes `objective` from `initial` without derivatives.
///
/// Converges when the displacement of a full sweep drops to `epsilon`.
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

    let mut directions: VecDeque<Vec<f64>> = (0..n)
        .map(|i| {
            let mut axis = vec![0.0; n];
            axis[i] = 1.0;
            axis
        })
        .collect();

    for iter in 1..=config.max_iters() {
        if let Some(newest) = directions.back() {
            step_along(&objective, &mut x, newest, config)?;
        }

        let sweep_start = x.clone();
        for direction in &directions {
            step_along(&objective, &mut x, direction, config)?;
        }

        let displacement = vector::sub(&x, &sweep_start)?;
        if vector::norm(&displacement) <= config.epsilon() {
            value = evaluate(&objective, &x)?;
            return Ok(Solution::new(Status::Converged, x, value, iter));
        }

        let step = step_along(&objective, &mut x, &displacement, config)?;
        value = evaluate(&objective, &x)?;

        let event = Event {
            iter,
            x: &x,
            objective: value,
            direction: &displacement,
            step,
        };
        if should_stop(&mut observer, &event) {
            return Ok(Solution::new(Status::StoppedByObserver, x, value, iter));
        }

        directions.pop_front();
        directions.push_back(displacement);
    }

    Ok(Solution::new(Status::MaxIters, x, value, config.max_iters()))
}

/// Minimizes `objective` using Powell's method without observation.
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
