use super::{Config, Error, Solution, Status, evaluate};

/// Newton-Raphson iteration on the derivative.
///
/// Steps `x ← x − df(x) / ddf(x)` from `initial`. Converges once both the
/// step and the derivative at the new point are within `epsilon`.
///
/// # Errors
///
/// Returns [`Error::ZeroCurvature`] if `ddf` vanishes at an iterate, or an
/// error if either callable produces a non-finite value.
pub fn newton<D, DD>(df: D, ddf: DD, initial: f64, config: &Config) -> Result<Solution, Error>
where
    D: Fn(f64) -> f64,
    DD: Fn(f64) -> f64,
{
    let epsilon = config.epsilon();
    let mut x = initial;
    let mut slope = evaluate(&df, x)?;

    for iter in 1..=config.max_iters() {
        let curvature = evaluate(&ddf, x)?;
        if curvature == 0.0 {
            return Err(Error::ZeroCurvature { x });
        }

        let step = slope / curvature;
        x -= step;
        slope = evaluate(&df, x)?;
        tracing::trace!(iter, x, step, slope, "newton step");

        if step.abs() <= epsilon && slope.abs() <= epsilon {
            return Ok(Solution::at(Status::Converged, x, iter, None));
        }
    }

    Ok(Solution::at(Status::MaxIters, x, config.max_iters(), None))
}
