use super::{Bracket, Config, Error, Solution, Status, evaluate};

/// Shrinks a bracket by comparing two points straddling its midpoint.
///
/// The points sit `0.1 * epsilon` apart; the half on the worse side is
/// discarded each iteration until the width is at most `epsilon`.
///
/// # Errors
///
/// Returns an error if `f` produces a non-finite value.
pub fn dichotomy<F>(f: F, bracket: Bracket, config: &Config) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
{
    let epsilon = config.epsilon();
    let half_gap = 0.05 * epsilon;
    let [mut left, mut right] = bracket.as_array();

    for iter in 1..=config.max_iters() {
        if right - left <= epsilon {
            return Ok(Solution::from_bounds(Status::Converged, left, right, iter - 1));
        }

        let mid = 0.5 * (left + right);
        let (lambda, mu) = (mid - half_gap, mid + half_gap);

        if evaluate(&f, lambda)? < evaluate(&f, mu)? {
            right = mu;
        } else {
            left = lambda;
        }
    }

    Ok(Solution::from_bounds(
        final_status(right - left, epsilon),
        left,
        right,
        config.max_iters(),
    ))
}

/// Status for a bracketing method that ran out of iterations.
pub(super) fn final_status(width: f64, epsilon: f64) -> Status {
    if width <= epsilon {
        Status::Converged
    } else {
        Status::MaxIters
    }
}
