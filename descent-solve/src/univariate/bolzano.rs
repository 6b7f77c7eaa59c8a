use super::{Bracket, Config, Error, Solution, Status, dichotomy::final_status, evaluate};

/// Bisects a bracket on the sign of the derivative at its midpoint.
///
/// Stops as soon as either the derivative at the midpoint is within
/// `epsilon` of zero or the bracket width drops to `epsilon`, whichever
/// happens first.
///
/// # Errors
///
/// Returns an error if `df` produces a non-finite value.
pub fn bolzano<F>(df: F, bracket: Bracket, config: &Config) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
{
    let epsilon = config.epsilon();
    let [mut left, mut right] = bracket.as_array();

    for iter in 1..=config.max_iters() {
        let mid = 0.5 * (left + right);
        let slope = evaluate(&df, mid)?;

        if slope.abs() <= epsilon {
            let bracket = Bracket::ordered(left, right);
            return Ok(Solution::at(Status::Converged, mid, iter, Some(bracket)));
        }

        if slope > 0.0 {
            right = mid;
        } else {
            left = mid;
        }

        if right - left <= epsilon {
            return Ok(Solution::from_bounds(Status::Converged, left, right, iter));
        }
    }

    Ok(Solution::from_bounds(
        final_status(right - left, epsilon),
        left,
        right,
        config.max_iters(),
    ))
}
