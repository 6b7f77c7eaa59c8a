use std::fmt;

/// Indicates how a driver finished.
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
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a descent driver.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Solution {
    /// Final driver status.
    pub status: Status,
    /// Final point.
    pub x: Vec<f64>,
    /// Objective value at `x`.
    pub objective: f64,
    /// Iteration count when the driver finished.
    ///
    /// For PARTAN this counts plain antigradient steps only.
    pub iters: usize,
    /// Acceleration steps taken, for drivers that distinguish them.
    pub acceleration_iters: Option<usize>,
}

impl Solution {
    pub(super) fn new(status: Status, x: Vec<f64>, objective: f64, iters: usize) -> Self {
        match status {
            Status::MaxIters => tracing::warn!(iters, objective, "driver hit the iteration cap"),
            Status::StoppedByObserver => tracing::debug!(iters, "driver stopped by observer"),
            Status::Converged => tracing::debug!(iters, objective, "driver converged"),
        }
        Self {
            status,
            x,
            objective,
            iters,
            acceleration_iters: None,
        }
    }

    pub(super) fn with_acceleration(mut self, acceleration_iters: usize) -> Self {
        self.acceleration_iters = Some(acceleration_iters);
        self
    }
}

/// Formats the solution as a short report.
///
/// ```text
/// Result:
///     Iterations: 4
///     Acceleration iterations: 2
///     Vector: { 1; 2 }
/// ```
impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Result:")?;
        writeln!(f, "\tIterations: {}", self.iters)?;
        if let Some(acceleration_iters) = self.acceleration_iters {
            writeln!(f, "\tAcceleration iterations: {acceleration_iters}")?;
        }
        write!(f, "\tVector: {{ ")?;
        for (i, value) in self.x.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, " }}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_counters_and_point() {
        let solution = Solution::new(Status::Converged, vec![1.0, 2.5], 0.0, 4);
        assert_eq!(
            solution.to_string(),
            "Result:\n\tIterations: 4\n\tVector: { 1; 2.5 }"
        );

        let solution = solution.with_acceleration(2);
        assert_eq!(
            solution.to_string(),
            "Result:\n\tIterations: 4\n\tAcceleration iterations: 2\n\tVector: { 1; 2.5 }"
        );
    }
}
