/// Control actions supported by the descent drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the driver and return the current point.
    StopEarly,
}

/// Event emitted by a driver after each outer iteration.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Point reached at the end of the iteration.
    pub x: &'a [f64],
    /// Objective value at `x`.
    pub objective: f64,
    /// Direction of the last line search.
    pub direction: &'a [f64],
    /// Step length taken along `direction`.
    pub step: f64,
}
