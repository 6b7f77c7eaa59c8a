use approx::assert_relative_eq;

use super::{Matrix, MatrixError};

/// Diagonally dominant test matrix, well conditioned for every `n`.
fn dominant(n: usize) -> Matrix {
    let grid: Vec<Vec<f64>> = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| {
                    if i == j {
                        n as f64 + 2.0
                    } else {
                        1.0 / (1.0 + i as f64 + 2.0 * j as f64)
                    }
                })
                .collect()
        })
        .collect();
    Matrix::from_rows("A", &grid).expect("valid grid")
}

fn assert_matrix_near(actual: &Matrix, expected: &Matrix, tol: f64) {
    assert_eq!(actual.shape(), expected.shape());
    for row in 0..actual.rows() {
        for col in 0..actual.cols() {
            assert_relative_eq!(actual[(row, col)], expected[(row, col)], epsilon = tol);
        }
    }
}

#[test]
fn constructors_fill_and_shape() {
    let zeros = Matrix::zeros("z", 2, 3).unwrap();
    assert_eq!(zeros.shape(), (2, 3));
    assert!(zeros.row(1).iter().all(|&v| v == 0.0));

    let filled = Matrix::filled("f", 1.5, 3, 2).unwrap();
    assert_eq!(filled.shape(), (3, 2));
    assert_relative_eq!(filled[(2, 1)], 1.5);

    let column = Matrix::from_vector("v", &[1.0, 2.0, 3.0]).unwrap();
    assert_eq!(column.shape(), (3, 1));
    assert_relative_eq!(column[(2, 0)], 3.0);

    let copy = column.clone();
    assert!(copy.try_eq(&column).unwrap());
    assert_eq!(copy.name(), "v");
}

#[test]
fn constructors_reject_bad_shapes() {
    assert!(matches!(
        Matrix::zeros("z", 0, 3),
        Err(MatrixError::EmptyShape { rows: 0, cols: 3 })
    ));
    assert!(matches!(
        Matrix::from_vector("v", &[]),
        Err(MatrixError::EmptyShape { .. })
    ));
    assert!(matches!(
        Matrix::from_rows("r", &[vec![1.0, 2.0], vec![3.0]]),
        Err(MatrixError::RaggedRows {
            row: 1,
            expected: 2,
            found: 1
        })
    ));
}

#[test]
fn assign_requires_matching_shape() {
    let mut target = Matrix::zeros("target", 2, 2).unwrap();
    let source = Matrix::from_rows("source", &[[1.0, 2.0], [3.0, 4.0]]).unwrap();

    target.assign(&source).unwrap();
    assert!(target.try_eq(&source).unwrap());
    assert_eq!(target.name(), "target");

    let wide = Matrix::zeros("wide", 2, 3).unwrap();
    assert!(matches!(
        target.assign(&wide),
        Err(MatrixError::DimensionMismatch { op: "assign", .. })
    ));
    assert_eq!(target.shape(), (2, 2));
}

#[test]
fn determinant_of_identity_is_one() {
    for n in 2..=8 {
        let identity = Matrix::identity("I", n).unwrap();
        assert_relative_eq!(identity.determinant().unwrap(), 1.0);
    }
}

#[test]
fn determinant_closed_forms_and_expansion() {
    let two = Matrix::from_rows("A", &[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    assert_relative_eq!(two.determinant().unwrap(), -2.0);

    let three = Matrix::from_rows("B", &[[6.0, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]])
        .unwrap();
    assert_relative_eq!(three.determinant().unwrap(), -306.0, epsilon = 1e-12);

    let four = Matrix::from_rows(
        "C",
        &[
            [1.0, 0.0, 2.0, -1.0],
            [3.0, 0.0, 0.0, 5.0],
            [2.0, 1.0, 4.0, -3.0],
            [1.0, 0.0, 5.0, 0.0],
        ],
    )
    .unwrap();
    assert_relative_eq!(four.determinant().unwrap(), 30.0, epsilon = 1e-12);

    // Upper triangular: determinant is the product of the diagonal.
    let mut five = Matrix::zeros("D", 5, 5).unwrap();
    for row in 0..5 {
        for col in row..5 {
            five[(row, col)] = if row == col { row as f64 + 1.0 } else { 7.0 };
        }
    }
    assert_relative_eq!(five.determinant().unwrap(), 120.0, epsilon = 1e-12);

    let one = Matrix::filled("E", 4.0, 1, 1).unwrap();
    assert_relative_eq!(one.determinant().unwrap(), 4.0);
}

#[test]
fn determinant_requires_square() {
    let wide = Matrix::zeros("W", 2, 3).unwrap();
    assert!(matches!(
        wide.determinant(),
        Err(MatrixError::NotSquare { rows: 2, cols: 3 })
    ));
    assert!(wide.inverse().is_err());
    assert!(wide.co_factor().is_err());
}

#[test]
fn cofactor_adjoint_and_inverse_of_two_by_two() {
    let a = Matrix::from_rows("A", &[[1.0, 2.0], [3.0, 4.0]]).unwrap();

    let cofactor = a.co_factor().unwrap();
    let expected = Matrix::from_rows("", &[[4.0, -3.0], [-2.0, 1.0]]).unwrap();
    assert!(cofactor.try_eq(&expected).unwrap());

    let adjoint = a.adjoint().unwrap();
    let expected = Matrix::from_rows("", &[[4.0, -2.0], [-3.0, 1.0]]).unwrap();
    assert!(adjoint.try_eq(&expected).unwrap());

    let inverse = a.inverse().unwrap();
    let expected = Matrix::from_rows("", &[[-2.0, 1.0], [1.5, -0.5]]).unwrap();
    assert_matrix_near(&inverse, &expected, 1e-15);
}

#[test]
fn cofactor_of_one_by_one_is_zero() {
    let a = Matrix::filled("A", 3.0, 1, 1).unwrap();
    assert_relative_eq!(a.co_factor().unwrap()[(0, 0)], 0.0);
    assert_relative_eq!(a.inverse().unwrap()[(0, 0)], 1.0 / 3.0);
}

#[test]
fn cofactor_of_three_by_three() {
    let a = Matrix::from_rows("A", &[[1.0, 2.0, 3.0], [0.0, 4.0, 5.0], [1.0, 0.0, 6.0]]).unwrap();
    let expected = Matrix::from_rows(
        "",
        &[[24.0, 5.0, -4.0], [-12.0, 3.0, 2.0], [-2.0, -5.0, 4.0]],
    )
    .unwrap();

    assert_matrix_near(&a.co_factor().unwrap(), &expected, 1e-12);
}

#[test]
fn inverse_times_matrix_is_identity() {
    for n in 2..=6 {
        let a = dominant(n);
        let product = a.inverse().unwrap().try_mul(&a).unwrap();
        let identity = Matrix::identity("I", n).unwrap();
        assert_matrix_near(&product, &identity, 1e-6);
    }
}

#[test]
fn inverse_of_singular_matrix_fails() {
    let singular = Matrix::from_rows("S", &[[2.0, 0.0, 1.0], [1.0, 3.0, 2.0], [1.0, 1.0, 1.0]])
        .unwrap();
    assert!(matches!(
        singular.inverse(),
        Err(MatrixError::SingularMatrix { .. })
    ));

    let repeated = Matrix::from_rows("R", &[[1.0, 2.0], [1.0, 2.0]]).unwrap();
    assert!(matches!(
        repeated.inverse(),
        Err(MatrixError::SingularMatrix { .. })
    ));

    let zero = Matrix::zeros("Z", 1, 1).unwrap();
    assert!(zero.inverse().is_err());
}

#[test]
fn double_transpose_is_identity() {
    let a = Matrix::from_rows("A", &[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    let t = a.transpose();
    assert_eq!(t.shape(), (3, 2));
    assert_relative_eq!(t[(2, 1)], 6.0);
    assert!(t.transpose().try_eq(&a).unwrap());
}

#[test]
fn elementwise_arithmetic() {
    let a = Matrix::from_rows("A", &[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    let b = Matrix::filled("B", 1.0, 2, 2).unwrap();

    let sum = a.try_add(&b).unwrap();
    assert!(sum.try_eq(&Matrix::from_rows("", &[[2.0, 3.0], [4.0, 5.0]]).unwrap()).unwrap());

    let diff = a.try_sub(&b).unwrap();
    assert!(diff.try_eq(&Matrix::from_rows("", &[[0.0, 1.0], [2.0, 3.0]]).unwrap()).unwrap());

    let scaled = &a * 2.0;
    assert_relative_eq!(scaled[(1, 1)], 8.0);
    let halved = scaled.try_div(4.0).unwrap();
    assert_relative_eq!(halved[(0, 1)], 1.0);

    assert!(matches!(a.try_div(0.0), Err(MatrixError::DivideByZero)));
}

#[test]
fn products() {
    let a = Matrix::from_rows("A", &[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    let b = Matrix::from_rows("B", &[[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]]).unwrap();

    let product = a.try_mul(&b).unwrap();
    let expected = Matrix::from_rows("", &[[58.0, 64.0], [139.0, 154.0]]).unwrap();
    assert!(product.try_eq(&expected).unwrap());

    let v = a.try_mul_vector(&[1.0, 0.0, -1.0]).unwrap();
    assert_eq!(v, vec![-2.0, -2.0]);
}

#[test]
fn shape_mismatches_are_errors() {
    let a = Matrix::zeros("A", 2, 3).unwrap();
    let b = Matrix::zeros("B", 3, 2).unwrap();

    assert!(matches!(
        a.try_add(&b),
        Err(MatrixError::DimensionMismatch {
            op: "add",
            left: (2, 3),
            right: (3, 2)
        })
    ));
    assert!(matches!(a.try_sub(&b), Err(MatrixError::DimensionMismatch { .. })));
    assert!(matches!(a.try_mul(&a), Err(MatrixError::DimensionMismatch { .. })));
    assert!(matches!(
        a.try_mul_vector(&[1.0, 2.0]),
        Err(MatrixError::DimensionMismatch { .. })
    ));
    assert!(matches!(a.try_eq(&b), Err(MatrixError::DimensionMismatch { .. })));
}

#[test]
fn equality_is_exact() {
    let a = Matrix::from_rows("A", &[[0.1 + 0.2]]).unwrap();
    let b = Matrix::from_rows("B", &[[0.3]]).unwrap();
    assert!(!a.try_eq(&b).unwrap());
}

#[test]
fn display_shows_name_and_rows() {
    let a = Matrix::from_rows("hessian", &[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    assert_eq!(a.to_string(), "hessian [2x2]\n  1 2\n  3 4\n");
}
