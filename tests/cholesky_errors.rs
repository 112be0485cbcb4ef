#![allow(non_snake_case)]
use numerica::algebra::*;

mod common;
use common::*;

#[test]
fn cholesky_not_square() {
    let A = Matrix::<f64>::zeros((3, 1));
    let err = Cholesky::new(&A).unwrap_err();
    assert_eq!(err, DenseFactorizationError::NotSquare { rows: 3, cols: 1 });

    let A = CscMatrix::<f64>::spalloc(2, 5, 0);
    assert!(matches!(
        A.cholesky(),
        Err(DenseFactorizationError::NotSquare { .. })
    ));
}

#[test]
fn cholesky_empty() {
    let A = Matrix::<f64>::zeros((0, 0));
    assert_eq!(
        Cholesky::new(&A),
        Err(DenseFactorizationError::EmptyMatrix)
    );
}

#[test]
fn cholesky_not_positive_definite() {
    let mut A = Matrix::<f64>::identity(10);
    A[(3, 3)] = -4.;
    assert_eq!(
        A.cholesky(),
        Err(DenseFactorizationError::NotPositiveDefinite(4))
    );

    // the zero matrix fails at the first pivot
    let Z = Matrix::<f64>::zeros((3, 3));
    assert_eq!(
        Z.cholesky(),
        Err(DenseFactorizationError::NotPositiveDefinite(1))
    );

    // indefinite, but with a positive diagonal
    #[rustfmt::skip]
    let A = Matrix::from(&[
        [1., 2., 0.],
        [2., 1., 0.],
        [0., 0., 1.]]);
    assert_eq!(
        A.cholesky(),
        Err(DenseFactorizationError::NotPositiveDefinite(2))
    );
}

#[test]
fn cholesky_nan_input() {
    let mut A = Matrix::<f64>::identity(3);
    A[(1, 1)] = f64::NAN;
    assert_eq!(
        A.cholesky(),
        Err(DenseFactorizationError::NotPositiveDefinite(2))
    );
}

#[test]
fn cholesky_solve_dimension_mismatch() {
    let mut rng = test_rng();
    let A = random_hpd::<f64>(&mut rng, 4);
    let chol = A.cholesky().unwrap();

    let expected = DenseFactorizationError::IncompatibleDimension {
        expected: (4, 1),
        found: (3, 1),
    };
    assert_eq!(chol.solve(&[1., 2., 3.]), Err(expected.clone()));

    let mut b = vec![1., 2., 3.];
    assert_eq!(chol.solve_in_place(&mut b), Err(expected));
    assert_eq!(b, vec![1., 2., 3.]);

    let mut x = vec![0.; 5];
    assert!(chol.solve_into(&[1., 2., 3., 4.], &mut x).is_err());

    let B = Matrix::<f64>::zeros((5, 2));
    assert_eq!(
        chol.solve_matrix(&B),
        Err(DenseFactorizationError::IncompatibleDimension {
            expected: (4, 2),
            found: (5, 2),
        })
    );

    let B = Matrix::<f64>::zeros((4, 2));
    let mut X = Matrix::<f64>::zeros((4, 3));
    assert!(chol.solve_matrix_into(&B, &mut X).is_err());
}

#[test]
fn cholesky_refactor_dimension_mismatch() {
    let chol = Matrix::<f64>::identity(3).cholesky().unwrap();
    assert_eq!(
        chol.clone().refactor(&Matrix::<f64>::identity(4)),
        Err(DenseFactorizationError::IncompatibleDimension {
            expected: (3, 3),
            found: (4, 4),
        })
    );

    let mut A = Matrix::<f64>::identity(3);
    A[(2, 2)] = -1.;
    assert_eq!(
        chol.refactor(&A),
        Err(DenseFactorizationError::NotPositiveDefinite(3))
    );
}

#[test]
fn cholesky_bad_settings() {
    let built = CholeskySettingsBuilder::<f64>::default()
        .hermitian_tol(-1e-3)
        .build();
    assert!(built.is_err());
}
