use thiserror::Error;

/// Errors from matrix construction and arithmetic.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum MatrixError {
    #[error("dimension mismatch in {op}: {}x{} vs {}x{}", .left.0, .left.1, .right.0, .right.1)]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("matrix dimensions must be non-zero, got {rows}x{cols}")]
    EmptyShape { rows: usize, cols: usize },

    #[error("row {row} has {found} elements, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("matrix is singular (determinant {determinant})")]
    SingularMatrix { determinant: f64 },

    #[error("division by zero")]
    DivideByZero,
}
