use super::{Bracket, Config, Error, Solution, Status, evaluate};

/// Regula falsi on the derivative.
///
/// Draws the secant through the derivative values at both bounds and
/// replaces the bound whose derivative has the same sign as the value at the
/// secant root. Converges once the derivative there is within `epsilon` of
/// zero.
///
/// # Errors
///
/// Returns [`Error::NoSignChange`] unless `df(left) ≤ 0 ≤ df(right)`, or an
/// error if `df` produces a non-finite value.
pub fn linear_interpolation<F>(df: F, bracket: Bracket, config: &Config) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
{
    let [mut left, mut right] = bracket.as_array();
    let mut slope_left = evaluate(&df, left)?;
    let mut slope_right = evaluate(&df, right)?;

    if slope_left > 0.0 || slope_right < 0.0 {
        return Err(Error::NoSignChange { left, right });
    }
    if slope_left == 0.0 {
        return Ok(Solution::at(Status::Converged, left, 0, Some(bracket)));
    }
    if slope_right == 0.0 {
        return Ok(Solution::at(Status::Converged, right, 0, Some(bracket)));
    }

    let mut x = right;
    for iter in 1..=config.max_iters() {
        x = right - slope_right * (right - left) / (slope_right - slope_left);
        let slope = evaluate(&df, x)?;

        if slope > 0.0 {
            right = x;
            slope_right = slope;
        } else {
            left = x;
            slope_left = slope;
        }

        if slope.abs() <= config.epsilon() {
            let bracket = Bracket::ordered(left, right);
            return Ok(Solution::at(Status::Converged, x, iter, Some(bracket)));
        }
    }

    let bracket = Bracket::ordered(left, right);
    Ok(Solution::at(
        Status::MaxIters,
        x,
        config.max_iters(),
        Some(bracket),
    ))
}
