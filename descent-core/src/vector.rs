//! Helpers for points and directions stored as `&[f64]`.

use thiserror::Error;

/// Errors from vector operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    #[error("vector length mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("cannot normalize a zero-norm vector")]
    DivideByZero,
}

/// Returns the Euclidean norm of `x`.
#[must_use]
pub fn norm(x: &[f64]) -> f64 {
    x.iter().map(|v| v * v).sum::<f64>().sqrt()
}

/// Returns the inner product of `a` and `b`.
///
/// # Errors
///
/// Returns [`VectorError::DimensionMismatch`] if the lengths differ.
pub fn dot(a: &[f64], b: &[f64]) -> Result<f64, VectorError> {
    check_len(a.len(), b.len())?;
    Ok(a.iter().zip(b).map(|(x, y)| x * y).sum::<f64>())
}

/// Returns `a - b`.
///
/// # Errors
///
/// Returns [`VectorError::DimensionMismatch`] if the lengths differ.
pub fn sub(a: &[f64], b: &[f64]) -> Result<Vec<f64>, VectorError> {
    check_len(a.len(), b.len())?;
    Ok(a.iter().zip(b).map(|(x, y)| x - y).collect())
}

/// Returns `a + scale * b`.
///
/// # Errors
///
/// Returns [`VectorError::DimensionMismatch`] if the lengths differ.
pub fn add_scaled(a: &[f64], scale: f64, b: &[f64]) -> Result<Vec<f64>, VectorError> {
    check_len(a.len(), b.len())?;
    Ok(a.iter().zip(b).map(|(x, y)| x + scale * y).collect())
}

/// Divides `x` by its norm in place.
///
/// # Errors
///
/// Returns [`VectorError::DivideByZero`] if the norm is zero; `x` is left
/// unchanged.
pub fn normalize(x: &mut [f64]) -> Result<(), VectorError> {
    let length = norm(x);
    if length == 0.0 {
        return Err(VectorError::DivideByZero);
    }
    for value in x.iter_mut() {
        *value /= length;
    }
    Ok(())
}

fn check_len(expected: usize, found: usize) -> Result<(), VectorError> {
    if expected == found {
        Ok(())
    } else {
        Err(VectorError::DimensionMismatch { expected, found })
    }
}
