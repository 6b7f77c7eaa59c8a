use super::{Bracket, Error, Triple, evaluate};

/// Maximum number of step doublings before bracketing gives up.
pub const MAX_EXPANSIONS: usize = 64;

/// Finds a bracket around a minimum of `f` by expanding from `initial`.
///
/// The search steps downhill from `initial`, doubling the step each round
/// while the function keeps decreasing. The returned bracket spans the point
/// before and the point after the last decrease.
///
/// If neither neighbor of `initial` is lower, the bracket is the symmetric
/// interval `[initial - step, initial + step]`.
///
/// # Errors
///
/// Returns [`Error::NoBracketFound`] if the function is still decreasing after
/// [`MAX_EXPANSIONS`] doublings or produces a non-finite value along the way.
pub fn sven_value<F>(f: F, initial: f64) -> Result<Bracket, Error>
where
    F: Fn(f64) -> f64,
{
    let walk = expand(&f, initial)?;
    if walk.expansions == 0 {
        let step = walk.step.abs();
        return Ok(Bracket::ordered(initial - step, initial + step));
    }
    Ok(Bracket::ordered(walk.prev.x, walk.next.x))
}

/// Finds a bracket around a root of the derivative `df`.
///
/// Steps against the sign of `df(initial)`, doubling the step until the
/// derivative changes sign (or hits zero) between consecutive points.
///
/// # Errors
///
/// Returns [`Error::NoBracketFound`] if no sign change is seen within
/// [`MAX_EXPANSIONS`] doublings.
pub fn sven_derivative<F>(df: F, initial: f64) -> Result<Bracket, Error>
where
    F: Fn(f64) -> f64,
{
    let mut step = initial_step(initial);
    let mut slope_prev = evaluate(&df, initial)?;
    if slope_prev > 0.0 {
        step = -step;
    }

    let mut prev = initial;
    let mut curr = initial + step;
    let mut slope_curr = probe(&df, curr, initial, 0)?;
    let mut expansions = 0;

    while sign(slope_prev) * sign(slope_curr) > 0.0 {
        if expansions == MAX_EXPANSIONS {
            tracing::warn!(initial, "derivative kept its sign through every expansion");
            return Err(Error::NoBracketFound {
                initial,
                expansions,
            });
        }
        expansions += 1;
        step *= 2.0;
        prev = curr;
        slope_prev = slope_curr;
        curr += step;
        slope_curr = probe(&df, curr, initial, expansions)?;
        tracing::trace!(prev, curr, expansions, "expanded derivative bracket");
    }

    Ok(Bracket::ordered(prev, curr))
}

/// Finds an equally spaced three-point bracket for [`dsc`](super::dsc).
///
/// Runs the same expansion as [`sven_value`], then evaluates the midpoint of
/// the last doubled interval. The half holding the lower value becomes the
/// triple, so its center has the lowest value of the three points.
///
/// # Errors
///
/// Same as [`sven_value`].
pub fn sven_dsc<F>(f: F, initial: f64) -> Result<Triple, Error>
where
    F: Fn(f64) -> f64,
{
    let walk = expand(&f, initial)?;
    if walk.expansions == 0 {
        let step = walk.step.abs();
        return Ok(Triple::ordered(initial - step, initial, initial + step));
    }

    let mid = 0.5 * (walk.curr.x + walk.next.x);
    if evaluate(&f, mid)? < walk.curr.value {
        Ok(Triple::ordered(walk.curr.x, mid, walk.next.x))
    } else {
        Ok(Triple::ordered(walk.prev.x, walk.curr.x, mid))
    }
}

#[derive(Debug, Clone, Copy)]
struct Sample {
    x: f64,
    value: f64,
}

/// The last three points visited by a downhill expansion.
#[derive(Debug)]
struct Walk {
    prev: Sample,
    curr: Sample,
    next: Sample,
    step: f64,
    expansions: usize,
}

fn expand<F>(f: &F, initial: f64) -> Result<Walk, Error>
where
    F: Fn(f64) -> f64,
{
    let mut step = initial_step(initial);
    let start = Sample {
        x: initial,
        value: evaluate(f, initial)?,
    };
    let mut next = Sample {
        x: initial + step,
        value: probe(f, initial + step, initial, 0)?,
    };
    if next.value > start.value {
        step = -step;
        next = Sample {
            x: initial + step,
            value: probe(f, initial + step, initial, 0)?,
        };
    }

    let mut walk = Walk {
        prev: start,
        curr: start,
        next,
        step,
        expansions: 0,
    };

    while walk.curr.value > walk.next.value {
        if walk.expansions == MAX_EXPANSIONS {
            tracing::warn!(initial, "objective kept decreasing through every expansion");
            return Err(Error::NoBracketFound {
                initial,
                expansions: walk.expansions,
            });
        }
        walk.expansions += 1;
        walk.step *= 2.0;
        let x = walk.next.x + walk.step;
        walk.prev = walk.curr;
        walk.curr = walk.next;
        walk.next = Sample {
            x,
            value: probe(f, x, initial, walk.expansions)?,
        };
        tracing::trace!(x, expansions = walk.expansions, "expanded bracket");
    }

    Ok(walk)
}

/// Evaluates a trial point, treating a non-finite value as a failed search.
fn probe<F>(f: &F, x: f64, initial: f64, expansions: usize) -> Result<f64, Error>
where
    F: Fn(f64) -> f64,
{
    evaluate(f, x).map_err(|_| Error::NoBracketFound {
        initial,
        expansions,
    })
}

fn initial_step(initial: f64) -> f64 {
    if initial == 0.0 {
        0.01
    } else {
        0.01 * initial.abs()
    }
}

/// Like `f64::signum`, but zero maps to zero.
fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}
