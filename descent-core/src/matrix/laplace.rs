use super::{Matrix, MatrixError};

impl Matrix {
    /// Returns the determinant.
    ///
    /// 2×2 and 3×3 use closed forms; larger matrices use Laplace expansion
    /// along the first row. A 1×1 matrix yields its single element.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] for a non-square matrix.
    pub fn determinant(&self) -> Result<f64, MatrixError> {
        self.require_square()?;
        Ok(self.laplace_determinant())
    }

    /// Returns the matrix of cofactors.
    ///
    /// A 1×1 matrix has no minors, so its cofactor matrix is the zero matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] for a non-square matrix.
    pub fn co_factor(&self) -> Result<Matrix, MatrixError> {
        let n = self.require_square()?;
        let name = format!("cof({})", self.name);

        let data = match n {
            1 => vec![0.0],
            2 => {
                let (a, b, c, d) = (self.data[0], self.data[1], self.data[2], self.data[3]);
                vec![d, -c, -b, a]
            }
            _ => {
                let mut data = Vec::with_capacity(n * n);
                for row in 0..n {
                    for col in 0..n {
                        let minor = self.minor(row, col).laplace_determinant();
                        data.push(checkerboard(row + col) * minor);
                    }
                }
                data
            }
        };

        Ok(Matrix::from_parts(name, n, n, data))
    }

    /// Returns the adjoint (adjugate): the transpose of the cofactor matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] for a non-square matrix.
    pub fn adjoint(&self) -> Result<Matrix, MatrixError> {
        let mut adjoint = self.co_factor()?.transpose();
        adjoint.set_name(format!("adj({})", self.name));
        Ok(adjoint)
    }

    /// Returns the inverse, computed as the adjoint divided by the determinant.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] for a non-square matrix, or
    /// [`MatrixError::SingularMatrix`] if the determinant is zero or not finite.
    pub fn inverse(&self) -> Result<Matrix, MatrixError> {
        let n = self.require_square()?;
        let determinant = self.laplace_determinant();

        #[allow(clippy::float_cmp)]
        if determinant == 0.0 || !determinant.is_finite() {
            return Err(MatrixError::SingularMatrix { determinant });
        }

        let name = format!("inv({})", self.name);
        if n == 1 {
            return Ok(Matrix::from_parts(name, 1, 1, vec![1.0 / determinant]));
        }

        Ok(self.adjoint()?.map(name, |v| v / determinant))
    }

    /// Determinant of a matrix already known to be square.
    fn laplace_determinant(&self) -> f64 {
        let n = self.rows;
        let at = |row: usize, col: usize| self.data[row * n + col];

        match n {
            1 => at(0, 0),
            2 => at(0, 0) * at(1, 1) - at(0, 1) * at(1, 0),
            3 => {
                at(0, 0) * at(1, 1) * at(2, 2)
                    + at(0, 1) * at(1, 2) * at(2, 0)
                    + at(0, 2) * at(1, 0) * at(2, 1)
                    - at(0, 0) * at(1, 2) * at(2, 1)
                    - at(0, 1) * at(1, 0) * at(2, 2)
                    - at(0, 2) * at(1, 1) * at(2, 0)
            }
            _ => (0..n)
                .map(|col| {
                    checkerboard(col) * at(0, col) * self.minor(0, col).laplace_determinant()
                })
                .sum(),
        }
    }

    /// Returns the square minor with `skip_row` and `skip_col` removed.
    ///
    /// Only called on square matrices of dimension two or more.
    fn minor(&self, skip_row: usize, skip_col: usize) -> Matrix {
        let n = self.rows;
        let mut data = Vec::with_capacity((n - 1) * (n - 1));
        for row in (0..n).filter(|&r| r != skip_row) {
            for col in (0..n).filter(|&c| c != skip_col) {
                data.push(self.data[row * n + col]);
            }
        }
        Matrix::from_parts("", n - 1, n - 1, data)
    }
}

/// Sign of the cofactor at a position whose indices sum to `index_sum`.
fn checkerboard(index_sum: usize) -> f64 {
    if index_sum % 2 == 0 { 1.0 } else { -1.0 }
}
