use super::Bracket;

/// Indicates whether the method converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Status {
    /// Converged according to the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,
}

/// The result of a one-dimensional refinement.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Solution {
    /// Final status.
    pub status: Status,

    /// Estimate of the optimum (or derivative root).
    pub x: f64,

    /// Iteration count when the method finished.
    pub iters: usize,

    /// Bracket after the last update; `None` for methods started from a point.
    pub bracket: Option<Bracket>,
}

impl Solution {
    /// Reports the midpoint of the final bracket.
    pub(super) fn from_bounds(status: Status, left: f64, right: f64, iters: usize) -> Self {
        let bracket = Bracket::ordered(left, right);
        Self::at(status, bracket.midpoint(), iters, Some(bracket))
    }

    pub(super) fn at(status: Status, x: f64, iters: usize, bracket: Option<Bracket>) -> Self {
        if status == Status::MaxIters {
            tracing::debug!(x, iters, "refinement stopped at iteration cap");
        }
        Self {
            status,
            x,
            iters,
            bracket,
        }
    }
}
