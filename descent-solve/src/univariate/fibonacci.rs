use super::{Bracket, Config, Error, Solution, Status, evaluate, golden_section::reflect};

/// Fibonacci numbers `F(0) ..= F(n + 1)` for the smallest `n ≥ 3` with
/// `F(n) > ratio`.
///
/// Returns `None` if `ratio` is not finite.
fn table(ratio: f64) -> Option<Vec<f64>> {
    if !ratio.is_finite() {
        return None;
    }

    let mut fib = vec![0.0, 1.0, 1.0, 2.0];
    while fib[fib.len() - 1] <= ratio {
        let n = fib.len();
        fib.push(fib[n - 1] + fib[n - 2]);
    }
    let n = fib.len();
    fib.push(fib[n - 1] + fib[n - 2]);
    Some(fib)
}

fn plan(bracket: &Bracket, config: &Config, method: &'static str) -> Result<Vec<f64>, Error> {
    let fib = table(bracket.width() / config.epsilon())
        .ok_or(Error::NonFiniteEstimate { method })?;
    tracing::trace!(method, steps = fib.len() - 3, "planned fibonacci search");
    Ok(fib)
}

/// Fibonacci search keeping two interior points.
///
/// The number of reductions is fixed up front: the smallest `N` with
/// `F(N) > (b − a) / ε`. Interior points are placed at Fibonacci ratios of
/// the current bracket. On the last reduction both points meet at the
/// midpoint, so the second probe is offset by `(b − a) / F(N + 1)`.
///
/// The iteration cap in `config` does not apply; the status is always
/// [`Status::Converged`] and `iters` is `N − 2`.
///
/// # Errors
///
/// Returns an error if `f` produces a non-finite value or the reduction ratio
/// is not finite.
pub fn fibonacci_one<F>(f: F, bracket: Bracket, config: &Config) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
{
    let fib = plan(&bracket, config, "fibonacci_one")?;
    let n = fib.len() - 2;
    let delta = bracket.width() / fib[n + 1];
    let [mut left, mut right] = bracket.as_array();

    let mut m = n;
    let mut lambda = left + fib[m - 2] / fib[m] * (right - left);
    let mut mu = left + fib[m - 1] / fib[m] * (right - left);
    let mut f_lambda = evaluate(&f, lambda)?;
    let mut f_mu = evaluate(&f, mu)?;

    while m > 3 {
        // The bracket shrinks by F(m-1)/F(m); ratios below use the new m.
        let keep_left = f_lambda < f_mu;
        m -= 1;
        if keep_left {
            right = mu;
            mu = lambda;
            f_mu = f_lambda;
            lambda = left + fib[m - 2] / fib[m] * (right - left);
            f_lambda = evaluate(&f, lambda)?;
        } else {
            left = lambda;
            lambda = mu;
            f_lambda = f_mu;
            mu = left + fib[m - 1] / fib[m] * (right - left);
            f_mu = evaluate(&f, mu)?;
        }
    }

    let probe = lambda + delta;
    if f_lambda < evaluate(&f, probe)? {
        right = probe;
    } else {
        left = lambda;
    }

    Ok(Solution::from_bounds(Status::Converged, left, right, n - 2))
}

/// Fibonacci search by symmetric reflection.
///
/// Uses the same step count as [`fibonacci_one`], but keeps a single interior
/// point and probes its mirror image. On the last reduction the point and its
/// mirror coincide at the midpoint, so the final probe is nudged by
/// `0.1 * epsilon`.
///
/// The iteration cap in `config` does not apply; the status is always
/// [`Status::Converged`] and `iters` is `N − 2`.
///
/// # Errors
///
/// Returns an error if `f` produces a non-finite value or the reduction ratio
/// is not finite.
pub fn fibonacci_two<F>(f: F, bracket: Bracket, config: &Config) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
{
    let fib = plan(&bracket, config, "fibonacci_two")?;
    let n = fib.len() - 2;
    let [mut left, mut right] = bracket.as_array();

    let mut point = left + fib[n - 1] / fib[n] * (right - left);
    let mut f_point = evaluate(&f, point)?;

    for _ in 3..n {
        let mirror = left + right - point;
        let f_mirror = evaluate(&f, mirror)?;
        reflect(
            &mut left,
            &mut right,
            (&mut point, &mut f_point),
            (mirror, f_mirror),
        );
    }

    let mirror = point + 0.1 * config.epsilon();
    let f_mirror = evaluate(&f, mirror)?;
    reflect(
        &mut left,
        &mut right,
        (&mut point, &mut f_point),
        (mirror, f_mirror),
    );

    Ok(Solution::from_bounds(Status::Converged, left, right, n - 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_stops_at_first_number_above_ratio() {
        let fib = table(20.0).expect("finite ratio");
        // F(8) = 21 is the first above 20, followed by F(9) = 34.
        assert_eq!(fib.len(), 10);
        assert_eq!(fib[8], 21.0);
        assert_eq!(fib[9], 34.0);
    }

    #[test]
    fn table_has_at_least_three_steps() {
        let fib = table(0.5).expect("finite ratio");
        assert_eq!(fib, vec![0.0, 1.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn table_rejects_infinite_ratio() {
        assert!(table(f64::INFINITY).is_none());
    }
}
