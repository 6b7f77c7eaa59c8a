use descent_core::vector;

use crate::{ray::Ray, univariate};

use super::{Config, Error};

/// Finds the step length minimizing `objective` along `direction` from `base`.
///
/// Brackets the ray with [`univariate::sven_value`] starting at zero, then
/// refines with [`univariate::fibonacci_two`] using the line-search config.
/// The bracket may extend to negative steps when `direction` points uphill.
/// A zero direction yields a zero step.
///
/// # Errors
///
/// Returns an error if the lengths differ, no bracket is found, or the
/// objective produces a non-finite value along the ray.
pub fn line_search<F>(
    objective: &F,
    base: &[f64],
    direction: &[f64],
    config: &Config,
) -> Result<f64, Error>
where
    F: Fn(&[f64]) -> f64,
{
    let ray = Ray::new(objective, base, direction)?;
    if vector::norm(direction) == 0.0 {
        return Ok(0.0);
    }

    let along = |alpha: f64| ray.value(alpha);
    let bracket = univariate::sven_value(along, 0.0)?;
    let solution = univariate::fibonacci_two(along, bracket, config.line_search())?;

    tracing::trace!(
        alpha = solution.x,
        left = bracket.left(),
        right = bracket.right(),
        "line search"
    );
    Ok(solution.x)
}
