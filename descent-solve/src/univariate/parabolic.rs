//! Successive parabolic interpolation.
//!
//! Each method fits a parabola through three samples and moves toward its
//! vertex. They differ in how the three samples are chosen and which vertex
//! formula is used.

use super::{Bracket, Config, Error, Solution, Status, Triple, evaluate};

/// Half-width of the probe triple used by [`interpolation_extrapolation`].
const PROBE_OFFSET: f64 = 0.001;

/// Below this magnitude, relative change falls back to absolute change.
const RELATIVE_FLOOR: f64 = 1e-12;

#[derive(Debug, Clone, Copy)]
struct Sample {
    x: f64,
    value: f64,
}

impl Sample {
    fn new<F: Fn(f64) -> f64>(f: &F, x: f64) -> Result<Self, Error> {
        Ok(Self {
            x,
            value: evaluate(f, x)?,
        })
    }
}

/// Vertex formulas for a parabola through `a`, `b`, `c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Vertex {
    /// Lagrange form in absolute coordinates.
    Lagrange,
    /// Lagrange form offset from the midpoint of `a` and `b`.
    Midpoint,
    /// Offset from `b`, better conditioned when the points cluster.
    Centered,
    /// Offset from `b` for equally spaced points.
    EqualSpacing,
}

impl Vertex {
    fn locate(self, a: Sample, b: Sample, c: Sample) -> f64 {
        let (fa, fb, fc) = (a.value, b.value, c.value);
        let (a, b, c) = (a.x, b.x, c.x);
        let weighted = fa * (b - c) + fb * (c - a) + fc * (a - b);

        match self {
            Self::Lagrange => {
                0.5 * (fa * (b * b - c * c) + fb * (c * c - a * a) + fc * (a * a - b * b))
                    / weighted
            }
            Self::Midpoint => 0.5 * (a + b) + 0.5 * (fa - fb) * (b - c) * (c - a) / weighted,
            Self::Centered => {
                let p = (b - a).powi(2) * (fb - fc) - (b - c).powi(2) * (fb - fa);
                let q = (b - a) * (fb - fc) - (b - c) * (fb - fa);
                b - 0.5 * p / q
            }
            Self::EqualSpacing => b + 0.5 * (b - a) * (fa - fc) / (fa - 2.0 * fb + fc),
        }
    }
}

fn relative_change(new: f64, old: f64) -> f64 {
    if old.abs() < RELATIVE_FLOOR {
        (new - old).abs()
    } else {
        ((new - old) / old).abs()
    }
}

fn settled(estimate: Sample, center: Sample, epsilon: f64) -> bool {
    relative_change(estimate.x, center.x) < epsilon
        && relative_change(estimate.value, center.value) < epsilon
}

fn vertex<F: Fn(f64) -> f64>(
    f: &F,
    formula: Vertex,
    [a, b, c]: [Sample; 3],
    method: &'static str,
) -> Result<Sample, Error> {
    let x = formula.locate(a, b, c);
    if !x.is_finite() {
        return Err(Error::NonFiniteEstimate { method });
    }
    Sample::new(f, x)
}

/// Parabolic steps around a moving center.
///
/// Each iteration samples `center ± 0.001`, jumps to the vertex of the
/// parabola through the three points, and repeats from there. No bracket is
/// maintained, so the method can extrapolate beyond the starting region.
///
/// Converges when the relative change of both the point and its value drops
/// below `epsilon`; the result is the average of the last two centers.
///
/// # Errors
///
/// Returns an error if the three samples are collinear or `f` produces a
/// non-finite value.
pub fn interpolation_extrapolation<F>(f: F, initial: f64, config: &Config) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
{
    let mut center = Sample::new(&f, initial)?;

    for iter in 1..=config.max_iters() {
        let left = Sample::new(&f, center.x - PROBE_OFFSET)?;
        let right = Sample::new(&f, center.x + PROBE_OFFSET)?;
        let estimate = vertex(
            &f,
            Vertex::Lagrange,
            [left, center, right],
            "interpolation_extrapolation",
        )?;

        if settled(estimate, center, config.epsilon()) {
            let x = 0.5 * (center.x + estimate.x);
            return Ok(Solution::at(Status::Converged, x, iter, None));
        }
        center = estimate;
    }

    Ok(Solution::at(
        Status::MaxIters,
        center.x,
        config.max_iters(),
        None,
    ))
}

/// Powell's successive parabolic interpolation within a bracket.
///
/// Starts from the bracket bounds and midpoint. The first vertex uses the
/// Lagrange form and later ones the midpoint-offset form. Each estimate
/// replaces a bound or the center depending on its value and position.
///
/// # Errors
///
/// Returns an error if the samples become collinear or `f` produces a
/// non-finite value.
pub fn powell<F>(f: F, bracket: Bracket, config: &Config) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
{
    let samples = [
        Sample::new(&f, bracket.left())?,
        Sample::new(&f, bracket.midpoint())?,
        Sample::new(&f, bracket.right())?,
    ];
    refine(&f, samples, config, "powell", |iter| {
        if iter == 1 {
            Vertex::Lagrange
        } else {
            Vertex::Midpoint
        }
    })
}

/// Davies–Swann–Campey refinement of a three-point bracket.
///
/// The first vertex assumes the triple is equally spaced, as produced by
/// [`sven_dsc`](super::sven_dsc); later vertices use the general three-point
/// formula. Bracket updates follow [`powell`].
///
/// # Errors
///
/// Returns an error if the samples become collinear or `f` produces a
/// non-finite value.
pub fn dsc<F>(f: F, triple: Triple, config: &Config) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
{
    let samples = [
        Sample::new(&f, triple.left())?,
        Sample::new(&f, triple.center())?,
        Sample::new(&f, triple.right())?,
    ];
    refine(&f, samples, config, "dsc", |iter| {
        if iter == 1 {
            Vertex::EqualSpacing
        } else {
            Vertex::Centered
        }
    })
}

fn refine<F, V>(
    f: &F,
    [mut left, mut center, mut right]: [Sample; 3],
    config: &Config,
    method: &'static str,
    formula: V,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
    V: Fn(usize) -> Vertex,
{
    let mut estimate = center;

    for iter in 1..=config.max_iters() {
        estimate = vertex(f, formula(iter), [left, center, right], method)?;
        tracing::trace!(method, iter, x = estimate.x, value = estimate.value, "vertex");

        if settled(estimate, center, config.epsilon()) {
            let x = 0.5 * (center.x + estimate.x);
            let bracket = Bracket::ordered(left.x, right.x);
            return Ok(Solution::at(Status::Converged, x, iter, Some(bracket)));
        }

        if center.value < estimate.value {
            if center.x < estimate.x {
                right = estimate;
            } else {
                left = estimate;
            }
        } else {
            if center.x < estimate.x {
                left = center;
            } else {
                right = center;
            }
            center = estimate;
        }
    }

    let x = 0.5 * (center.x + estimate.x);
    let bracket = Bracket::ordered(left.x, right.x);
    Ok(Solution::at(
        Status::MaxIters,
        x,
        config.max_iters(),
        Some(bracket),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn samples(f: impl Fn(f64) -> f64, xs: [f64; 3]) -> [Sample; 3] {
        xs.map(|x| Sample { x, value: f(x) })
    }

    #[test]
    fn every_formula_finds_the_vertex_of_a_parabola() {
        let f = |x: f64| 3.0 * (x - 1.25).powi(2) + 0.5;
        let uneven = samples(f, [0.0, 1.0, 3.0]);
        let even = samples(f, [0.0, 1.0, 2.0]);

        for formula in [Vertex::Lagrange, Vertex::Midpoint, Vertex::Centered] {
            let [a, b, c] = uneven;
            assert_relative_eq!(formula.locate(a, b, c), 1.25, epsilon = 1e-12);
        }
        let [a, b, c] = even;
        assert_relative_eq!(Vertex::EqualSpacing.locate(a, b, c), 1.25, epsilon = 1e-12);
    }

    #[test]
    fn collinear_samples_are_rejected() {
        let line = |x: f64| 2.0 * x + 1.0;
        let err = vertex(&line, Vertex::Lagrange, samples(line, [0.0, 1.0, 2.0]), "test")
            .expect_err("collinear points have no vertex");
        assert_eq!(err, Error::NonFiniteEstimate { method: "test" });
    }

    #[test]
    fn relative_change_falls_back_near_zero() {
        assert_relative_eq!(relative_change(1.5, 1.0), 0.5);
        assert_relative_eq!(relative_change(1e-9, 0.0), 1e-9);
    }
}
