use descent_core::{MatrixError, vector::VectorError};

use crate::univariate;

/// Errors that can occur while running a descent driver.
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum Error {
    #[error("initial point is empty")]
    EmptyPoint,

    #[error("objective returned a non-finite value {value}")]
    NonFiniteObjective { value: f64 },

    #[error(transparent)]
    Matrix(#[from] MatrixError),

    #[error(transparent)]
    Vector(#[from] VectorError),

    #[error("line search failed: {0}")]
    LineSearch(#[from] univariate::Error),
}
