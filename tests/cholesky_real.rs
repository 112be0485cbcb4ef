#![allow(non_snake_case)]
use numerica::algebra::*;

mod common;
use common::*;

#[test]
fn cholesky_identity() {
    for n in [1, 10, 100] {
        let I = Matrix::<f64>::identity(n);
        let chol = Cholesky::new(&I).unwrap();

        assert_eq!(chol.order(), n);
        assert_eq!(chol.factor(), &I);
        assert_eq!(chol.determinant(), 1.0);
        assert_eq!(chol.determinant_ln(), 0.0);
    }
}

#[test]
fn cholesky_reconstructs_input() {
    let mut rng = test_rng();
    let A = random_hpd::<f64>(&mut rng, 20);

    let chol = A.cholesky().unwrap();
    let L = chol.factor();
    assert!(L.is_tril());

    let mut LLt = Matrix::zeros((20, 20));
    LLt.mul(L, &L.t(), 1.0, 0.0);
    assert!(LLt.data().norm_inf_diff(A.data()) < 1e-10);
}

#[test]
fn cholesky_solve_vector() {
    let mut rng = test_rng();

    for n in [1, 5, 50] {
        let A = random_hpd::<f64>(&mut rng, n);
        let b = random_vector::<f64>(&mut rng, n);
        let (Acopy, bcopy) = (A.clone(), b.clone());

        let chol = Cholesky::new(&A).unwrap();
        let x = chol.solve(&b).unwrap();

        assert!(residual(&A, &x, &b) < 1e-3);
        assert_eq!(A, Acopy);
        assert_eq!(b, bcopy);
    }
}

#[test]
fn cholesky_solve_matrix() {
    let mut rng = test_rng();
    let A = random_hpd::<f64>(&mut rng, 30);
    let B = random_matrix::<f64>(&mut rng, (30, 4));
    let Bcopy = B.clone();

    let chol = Cholesky::new(&A).unwrap();
    let X = chol.solve_matrix(&B).unwrap();

    assert_eq!(X.size(), (30, 4));
    assert!(residual_matrix(&A, &X, &B) < 0.01);
    assert_eq!(B, Bcopy);
}

#[test]
fn cholesky_solve_variants_agree() {
    let mut rng = test_rng();
    let A = random_hpd::<f64>(&mut rng, 12);
    let b = random_vector::<f64>(&mut rng, 12);
    let B = random_matrix::<f64>(&mut rng, (12, 3));
    let chol = Cholesky::new(&A).unwrap();

    let x = chol.solve(&b).unwrap();

    let mut xinto = vec![0.; 12];
    chol.solve_into(&b, &mut xinto).unwrap();
    assert_eq!(x, xinto);

    let mut xinplace = b.clone();
    chol.solve_in_place(&mut xinplace).unwrap();
    assert_eq!(x, xinplace);

    let X = chol.solve_matrix(&B).unwrap();

    let mut Xinto = Matrix::zeros((12, 3));
    chol.solve_matrix_into(&B, &mut Xinto).unwrap();
    assert_eq!(X, Xinto);

    let mut Xinplace = B.clone();
    chol.solve_matrix_in_place(&mut Xinplace).unwrap();
    assert_eq!(X, Xinplace);

    // a single column right hand side matches the vector solve
    let B1 = Matrix::new_from_slice((12, 1), &b);
    assert_eq!(chol.solve_matrix(&B1).unwrap().data(), x.as_slice());
}

#[test]
fn cholesky_determinant() {
    #[rustfmt::skip]
    let A = Matrix::<f64>::from(&[
        [ 2., -1.,  0.],
        [-1.,  2., -1.],
        [ 0., -1.,  2.]]);

    let chol = A.cholesky().unwrap();
    assert!((chol.determinant() - 4.).abs() < 1e-12);
    assert!((chol.determinant_ln() - 4f64.ln()).abs() < 1e-12);

    let mut rng = test_rng();
    let A = random_hpd::<f64>(&mut rng, 10);
    let chol = A.cholesky().unwrap();
    let det = chol.determinant();
    assert!(det > 0.);
    assert!((chol.determinant_ln() - det.ln()).abs() < 1e-10);
}

#[test]
fn cholesky_determinant_ln_large() {
    // the determinant overflows but its log does not
    let mut A = Matrix::<f64>::identity(400);
    A.data_mut().scale(1e4);
    let chol = A.cholesky().unwrap();

    assert!(chol.determinant().is_infinite());
    let expected = 400. * 1e4f64.ln();
    assert!((chol.determinant_ln() - expected).abs() < 1e-9 * expected);
}

#[test]
fn cholesky_inverse() {
    let mut rng = test_rng();
    let A = random_hpd::<f64>(&mut rng, 15);
    let Ainv = A.cholesky().unwrap().inverse();

    let mut M = Matrix::zeros((15, 15));
    M.mul(&A, &Ainv, 1.0, 0.0);
    assert!(M.data().norm_inf_diff(Matrix::<f64>::identity(15).data()) < 1e-10);
}

#[test]
fn cholesky_refactor() {
    let mut rng = test_rng();
    let A1 = random_hpd::<f64>(&mut rng, 8);
    let A2 = random_hpd::<f64>(&mut rng, 8);
    let b = random_vector::<f64>(&mut rng, 8);

    let chol = Cholesky::new(&A1).unwrap();
    let chol = chol.refactor(&A2).unwrap();

    let x = chol.solve(&b).unwrap();
    assert!(residual(&A2, &x, &b) < 1e-3);
    assert_eq!(chol, Cholesky::new(&A2).unwrap());
}

#[test]
fn cholesky_single_precision() {
    let mut rng = test_rng();
    let A = random_hpd::<f32>(&mut rng, 20);
    let b = random_vector::<f32>(&mut rng, 20);

    let x = A.cholesky().unwrap().solve(&b).unwrap();
    assert!(residual(&A, &x, &b) < 1e-3);
}

#[test]
fn cholesky_sparse_input() {
    // tridiagonal, lower triangle only
    let n = 6;
    let mut colptr = vec![0];
    let mut rowval = vec![];
    let mut nzval = vec![];
    for col in 0..n {
        rowval.push(col);
        nzval.push(2.0);
        if col + 1 < n {
            rowval.push(col + 1);
            nzval.push(-1.0);
        }
        colptr.push(rowval.len());
    }
    let A = CscMatrix::new(n, n, colptr, rowval, nzval);
    assert!(A.check_format().is_ok());

    let chol = A.cholesky().unwrap();
    assert_eq!(chol, Cholesky::new(&A.to_dense()).unwrap());

    // det of the n x n second difference matrix is n+1
    assert!((chol.determinant() - (n + 1) as f64).abs() < 1e-10);
}

#[test]
fn cholesky_shared_between_threads() {
    let mut rng = test_rng();
    let A = random_hpd::<f64>(&mut rng, 10);
    let bs: Vec<Vec<f64>> = (0..4).map(|_| random_vector(&mut rng, 10)).collect();
    let chol = A.cholesky().unwrap();

    std::thread::scope(|s| {
        for b in &bs {
            let (chol, A) = (&chol, &A);
            s.spawn(move || {
                let x = chol.solve(b).unwrap();
                assert!(residual(A, &x, b) < 1e-3);
            });
        }
    });
}
