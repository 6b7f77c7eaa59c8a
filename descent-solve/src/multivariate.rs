//! Descent drivers for multivariate objectives.
//!
//! Every driver follows the same outer loop: choose a direction, minimize the
//! objective along it with [`line_search`], move to the new point, and test
//! for convergence. The drivers differ only in how the direction is chosen:
//!
//! - [`partan`]: antigradient steps followed by an acceleration step
//! - [`newton`]: Newton direction with backtracking step control
//! - [`quasi_newton`]: inverse Hessian estimate from Pearson's update
//! - [`conjugate_gradient`]: Daniel's conjugate gradient with restarts
//! - [`powell`]: derivative-free conjugate direction set
//!
//! Each driver module provides `minimize`, which reports an [`Event`] to an
//! observer after every outer iteration, and `minimize_unobserved`.

pub mod conjugate_gradient;
pub mod newton;
pub mod partan;
pub mod powell;
pub mod quasi_newton;

mod config;
mod error;
mod event;
mod line_search;
mod solution;


use descent_core::{Observer, vector};

use crate::ray::convert_dimensions;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Action, Event};
pub use line_search::line_search;
pub use solution::{Solution, Status};

/// Evaluates the objective, rejecting non-finite values.
fn evaluate<F>(objective: &F, x: &[f64]) -> Result<f64, Error>
where
    F: Fn(&[f64]) -> f64,
{
    let value = objective(x);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFiniteObjective { value })
    }
}

/// Copies the initial point and evaluates the objective there.
fn start<F>(objective: &F, initial: &[f64]) -> Result<(Vec<f64>, f64), Error>
where
    F: Fn(&[f64]) -> f64,
{
    if initial.is_empty() {
        return Err(Error::EmptyPoint);
    }
    let value = evaluate(objective, initial)?;
    Ok((initial.to_vec(), value))
}

/// Runs a line search along `direction` and moves `x` to the result.
///
/// Returns the step length.
fn step_along<F>(
    objective: &F,
    x: &mut [f64],
    direction: &[f64],
    config: &Config,
) -> Result<f64, Error>
where
    F: Fn(&[f64]) -> f64,
{
    let alpha = line_search(objective, x, direction, config)?;
    let base = x.to_vec();
    convert_dimensions(alpha, &base, direction, x)?;
    Ok(alpha)
}

/// Emits an event and returns true if the observer asked to stop.
fn should_stop<Obs>(observer: &mut Obs, event: &Event<'_>) -> bool
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    tracing::debug!(
        iter = event.iter,
        objective = event.objective,
        step = event.step,
        direction_norm = vector::norm(event.direction),
        "driver iteration"
    );
    matches!(observer.observe(event), Some(Action::StopEarly))
}
