//! Small dense matrices for Newton-family and quasi-Newton directions.
//!
//! Matrices are sized by the number of optimization variables, so they stay
//! small (typically at most 10×10). The determinant and inverse use recursive
//! Laplace expansion, which is exponential in the dimension but exact in its
//! structure and easy to verify against hand-computed values.

mod error;
mod laplace;
mod ops;

#[cfg(test)]
mod tests;

use std::fmt;
use std::ops::{Index, IndexMut};

pub use error::MatrixError;

/// A named, fixed-shape, row-major matrix of `f64`.
///
/// The name is a diagnostic label only; it takes no part in arithmetic or
/// comparisons. The shape never changes after construction.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Matrix {
    name: String,
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates a zero-filled `rows × cols` matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::EmptyShape`] if either dimension is zero.
    pub fn zeros(name: impl Into<String>, rows: usize, cols: usize) -> Result<Self, MatrixError> {
        Self::filled(name, 0.0, rows, cols)
    }

    /// Creates a `rows × cols` matrix with every element set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::EmptyShape`] if either dimension is zero.
    pub fn filled(
        name: impl Into<String>,
        value: f64,
        rows: usize,
        cols: usize,
    ) -> Result<Self, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::EmptyShape { rows, cols });
        }
        Ok(Self::from_parts(name, rows, cols, vec![value; rows * cols]))
    }

    /// Creates an `n × n` identity matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::EmptyShape`] if `n` is zero.
    pub fn identity(name: impl Into<String>, n: usize) -> Result<Self, MatrixError> {
        let mut matrix = Self::zeros(name, n, n)?;
        for i in 0..n {
            matrix[(i, i)] = 1.0;
        }
        Ok(matrix)
    }

    /// Creates an `R × 1` column matrix from a vector.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::EmptyShape`] if the vector is empty.
    pub fn from_vector(name: impl Into<String>, vector: &[f64]) -> Result<Self, MatrixError> {
        if vector.is_empty() {
            return Err(MatrixError::EmptyShape { rows: 0, cols: 1 });
        }
        Ok(Self::from_parts(name, vector.len(), 1, vector.to_vec()))
    }

    /// Copies an existing grid of rows into a new matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::EmptyShape`] if the grid or its first row is
    /// empty, or [`MatrixError::RaggedRows`] if any row has a different length
    /// than the first.
    pub fn from_rows<R: AsRef<[f64]>>(
        name: impl Into<String>,
        grid: &[R],
    ) -> Result<Self, MatrixError> {
        let rows = grid.len();
        let cols = grid.first().map_or(0, |row| row.as_ref().len());
        if rows == 0 || cols == 0 {
            return Err(MatrixError::EmptyShape { rows, cols });
        }

        let mut data = Vec::with_capacity(rows * cols);
        for (row, values) in grid.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != cols {
                return Err(MatrixError::RaggedRows {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            data.extend_from_slice(values);
        }

        Ok(Self::from_parts(name, rows, cols, data))
    }

    /// Builds a matrix from parts whose shape is already known to be valid.
    fn from_parts(name: impl Into<String>, rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self {
            name: name.into(),
            rows,
            cols,
            data,
        }
    }

    /// Returns the diagnostic name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the diagnostic name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns row `row` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[must_use]
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Copies the data of `other` into `self`.
    ///
    /// The name of `self` is kept.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if the shapes differ; the
    /// matrix is never resized.
    pub fn assign(&mut self, other: &Matrix) -> Result<(), MatrixError> {
        self.require_same_shape("assign", other)?;
        self.data.copy_from_slice(&other.data);
        Ok(())
    }

    /// Returns the transpose.
    #[must_use]
    pub fn transpose(&self) -> Matrix {
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                data.push(self[(row, col)]);
            }
        }
        Self::from_parts(format!("{}^T", self.name), self.cols, self.rows, data)
    }

    /// Applies `f` to every element, producing a matrix with the given name.
    fn map(&self, name: impl Into<String>, f: impl Fn(f64) -> f64) -> Matrix {
        let data = self.data.iter().map(|&v| f(v)).collect();
        Self::from_parts(name, self.rows, self.cols, data)
    }

    fn require_same_shape(&self, op: &'static str, other: &Matrix) -> Result<(), MatrixError> {
        if self.shape() == other.shape() {
            Ok(())
        } else {
            Err(MatrixError::DimensionMismatch {
                op,
                left: self.shape(),
                right: other.shape(),
            })
        }
    }

    fn require_square(&self) -> Result<usize, MatrixError> {
        if self.rows == self.cols {
            Ok(self.rows)
        } else {
            Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            })
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(row < self.rows && col < self.cols, "index out of bounds");
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(row < self.rows && col < self.cols, "index out of bounds");
        &mut self.data[row * self.cols + col]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} [{}x{}]", self.name, self.rows, self.cols)?;
        for row in 0..self.rows {
            let cells: Vec<String> = self.row(row).iter().map(f64::to_string).collect();
            writeln!(f, "  {}", cells.join(" "))?;
        }
        Ok(())
    }
}
