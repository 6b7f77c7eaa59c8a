use super::{Bracket, Config, Error, Solution, Status, dichotomy::final_status, evaluate};

/// Inverse golden ratio, `(√5 − 1) / 2`.
const INV_PHI: f64 = 0.618_033_988_749_894_9;

/// `1 − INV_PHI`, equivalently `(3 − √5) / 2`.
const INV_PHI_SQ: f64 = 0.381_966_011_250_105_1;

/// Golden section search keeping two interior points.
///
/// Each iteration keeps one interior point and recomputes the other from the
/// golden ratio of the shrunken bracket, so only one new evaluation is needed.
///
/// # Errors
///
/// Returns an error if `f` produces a non-finite value.
pub fn golden_section_one<F>(f: F, bracket: Bracket, config: &Config) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
{
    let epsilon = config.epsilon();
    let [mut left, mut right] = bracket.as_array();

    let mut lambda = left + INV_PHI_SQ * (right - left);
    let mut mu = left + INV_PHI * (right - left);
    let mut f_lambda = evaluate(&f, lambda)?;
    let mut f_mu = evaluate(&f, mu)?;

    for iter in 1..=config.max_iters() {
        if right - left <= epsilon {
            return Ok(Solution::from_bounds(Status::Converged, left, right, iter - 1));
        }

        if f_lambda > f_mu {
            left = lambda;
            lambda = mu;
            f_lambda = f_mu;
            mu = left + INV_PHI * (right - left);
            f_mu = evaluate(&f, mu)?;
        } else {
            right = mu;
            mu = lambda;
            f_mu = f_lambda;
            lambda = left + INV_PHI_SQ * (right - left);
            f_lambda = evaluate(&f, lambda)?;
        }
    }

    Ok(Solution::from_bounds(
        final_status(right - left, epsilon),
        left,
        right,
        config.max_iters(),
    ))
}

/// Golden section search by symmetric reflection.
///
/// Keeps a single interior point and probes its mirror image about the
/// bracket midpoint. Whichever of the pair is lower stays as the interior
/// point of the shrunken bracket.
///
/// # Errors
///
/// Returns an error if `f` produces a non-finite value.
pub fn golden_section_two<F>(f: F, bracket: Bracket, config: &Config) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
{
    let epsilon = config.epsilon();
    let [mut left, mut right] = bracket.as_array();

    let mut point = left + INV_PHI * (right - left);
    let mut f_point = evaluate(&f, point)?;

    for iter in 1..=config.max_iters() {
        if right - left <= epsilon {
            return Ok(Solution::from_bounds(Status::Converged, left, right, iter - 1));
        }

        let mirror = left + right - point;
        let f_mirror = evaluate(&f, mirror)?;
        reflect(
            &mut left,
            &mut right,
            (&mut point, &mut f_point),
            (mirror, f_mirror),
        );
    }

    Ok(Solution::from_bounds(
        final_status(right - left, epsilon),
        left,
        right,
        config.max_iters(),
    ))
}

/// Shrinks `[left, right]` given an interior point and its mirror image.
///
/// The lower of the two stays as the interior point; the other becomes the
/// new bound on its side.
pub(super) fn reflect(
    left: &mut f64,
    right: &mut f64,
    (point, f_point): (&mut f64, &mut f64),
    (mirror, f_mirror): (f64, f64),
) {
    let keep_point = *f_point < f_mirror;
    match (*point < mirror, keep_point) {
        (true, true) => *right = mirror,
        (false, true) => *left = mirror,
        (true, false) => {
            *left = *point;
            *point = mirror;
            *f_point = f_mirror;
        }
        (false, false) => {
            *right = *point;
            *point = mirror;
            *f_point = f_mirror;
        }
    }
}
