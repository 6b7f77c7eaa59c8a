use thiserror::Error;

use crate::{MAX_ITERATIONS, differential::Differencing, univariate};

/// Line-search tolerance relative to the driver tolerance.
const LINE_SEARCH_SCALE: f64 = 1e-3;

/// Configuration shared by the descent drivers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Config {
    epsilon: f64,
    max_iters: usize,
    line_search: univariate::Config,
    differencing: Differencing,
}

/// Errors that can occur when validating a driver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("epsilon must be finite and positive")]
    Epsilon,
}

impl Default for Config {
    fn default() -> Self {
        let epsilon = 1e-4;
        Self {
            epsilon,
            max_iters: MAX_ITERATIONS,
            line_search: univariate::Config::unchecked(epsilon * LINE_SEARCH_SCALE, MAX_ITERATIONS),
            differencing: Differencing::default(),
        }
    }
}

impl Config {
    /// Creates a config with the given tolerance and outer iteration cap.
    ///
    /// The line-search tolerance defaults to `epsilon * 1e-3`.
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` is non-positive or non-finite.
    pub fn new(epsilon: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(ConfigError::Epsilon);
        }
        let line_search = univariate::Config::new(epsilon * LINE_SEARCH_SCALE, MAX_ITERATIONS)
            .map_err(|_| ConfigError::Epsilon)?;

        Ok(Self {
            epsilon,
            max_iters,
            line_search,
            differencing: Differencing::default(),
        })
    }

    /// Replaces the config used by every line search.
    #[must_use]
    pub fn with_line_search(mut self, line_search: univariate::Config) -> Self {
        self.line_search = line_search;
        self
    }

    /// Replaces the finite-difference steps.
    #[must_use]
    pub fn with_differencing(mut self, differencing: Differencing) -> Self {
        self.differencing = differencing;
        self
    }

    /// Returns the convergence tolerance.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the outer iteration cap.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the config used by every line search.
    #[must_use]
    pub fn line_search(&self) -> &univariate::Config {
        &self.line_search
    }

    /// Returns the finite-difference steps.
    #[must_use]
    pub fn differencing(&self) -> &Differencing {
        &self.differencing
    }
}
