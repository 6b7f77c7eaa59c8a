use thiserror::Error;

use crate::MAX_ITERATIONS;

/// Configuration shared by the refinement methods.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Config {
    epsilon: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a refinement config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("epsilon must be finite and positive")]
    Epsilon,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            epsilon: 1e-5,
            max_iters: MAX_ITERATIONS,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` is non-positive or non-finite.
    pub fn new(epsilon: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(ConfigError::Epsilon);
        }
        Ok(Self { epsilon, max_iters })
    }

    /// Creates a config with the given tolerance and the default iteration cap.
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` is non-positive or non-finite.
    pub fn with_epsilon(epsilon: f64) -> Result<Self, ConfigError> {
        Self::new(epsilon, MAX_ITERATIONS)
    }

    /// Builds a config from a tolerance already known to be valid.
    pub(crate) const fn unchecked(epsilon: f64, max_iters: usize) -> Self {
        Self { epsilon, max_iters }
    }

    /// Returns the convergence tolerance.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the iteration cap.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_epsilon() {
        assert_eq!(Config::new(0.0, 10), Err(ConfigError::Epsilon));
        assert_eq!(Config::new(-1e-3, 10), Err(ConfigError::Epsilon));
        assert_eq!(Config::with_epsilon(f64::NAN), Err(ConfigError::Epsilon));
    }

    #[test]
    fn default_uses_shared_cap() {
        assert_eq!(Config::default().max_iters(), MAX_ITERATIONS);
    }
}
