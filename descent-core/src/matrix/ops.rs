use std::ops::Mul;

use super::{Matrix, MatrixError};

impl Matrix {
    /// Element-wise sum.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if the shapes differ.
    pub fn try_add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with("add", other, |a, b| a + b)
    }

    /// Element-wise difference.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if the shapes differ.
    pub fn try_sub(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with("sub", other, |a, b| a - b)
    }

    /// Matrix product `self · other`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] unless `self.cols() ==
    /// other.rows()`.
    pub fn try_mul(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.cols != other.rows {
            return Err(MatrixError::DimensionMismatch {
                op: "mul",
                left: self.shape(),
                right: other.shape(),
            });
        }

        let mut data = Vec::with_capacity(self.rows * other.cols);
        for row in 0..self.rows {
            for col in 0..other.cols {
                let sum: f64 = (0..self.cols)
                    .map(|k| self[(row, k)] * other[(k, col)])
                    .sum();
                data.push(sum);
            }
        }

        Ok(Matrix::from_parts(
            format!("{}*{}", self.name, other.name),
            self.rows,
            other.cols,
            data,
        ))
    }

    /// Multiplies by a column vector and returns the flat result.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] unless `self.cols()` equals
    /// the vector length.
    pub fn try_mul_vector(&self, vector: &[f64]) -> Result<Vec<f64>, MatrixError> {
        if self.cols != vector.len() {
            return Err(MatrixError::DimensionMismatch {
                op: "mul",
                left: self.shape(),
                right: (vector.len(), 1),
            });
        }

        Ok((0..self.rows)
            .map(|row| self.row(row).iter().zip(vector).map(|(a, b)| a * b).sum::<f64>())
            .collect())
    }

    /// Divides every element by `divisor`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DivideByZero`] if `divisor` is zero.
    pub fn try_div(&self, divisor: f64) -> Result<Matrix, MatrixError> {
        #[allow(clippy::float_cmp)]
        if divisor == 0.0 {
            return Err(MatrixError::DivideByZero);
        }
        Ok(self.map(self.name.clone(), |v| v / divisor))
    }

    /// Compares every element for exact equality.
    ///
    /// There is no tolerance: use it for structural comparisons, not for
    /// results of floating-point arithmetic.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if the shapes differ.
    pub fn try_eq(&self, other: &Matrix) -> Result<bool, MatrixError> {
        self.require_same_shape("eq", other)?;
        #[allow(clippy::float_cmp)]
        let equal = self.data.iter().zip(&other.data).all(|(a, b)| a == b);
        Ok(equal)
    }

    fn zip_with(
        &self,
        op: &'static str,
        other: &Matrix,
        f: impl Fn(f64, f64) -> f64,
    ) -> Result<Matrix, MatrixError> {
        self.require_same_shape(op, other)?;
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Matrix::from_parts(self.name.clone(), self.rows, self.cols, data))
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, scalar: f64) -> Matrix {
        self.map(self.name.clone(), |v| v * scalar)
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(mut self, scalar: f64) -> Matrix {
        for value in &mut self.data {
            *value *= scalar;
        }
        self
    }
}
