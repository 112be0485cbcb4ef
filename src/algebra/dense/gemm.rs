#![allow(non_snake_case)]

use crate::algebra::*;

impl<T> MultiplyGEMM for Matrix<T>
where
    T: ScalarT,
{
    type T = T;
    // implements self = C = αA*B + βC
    fn mul<MATA, MATB>(&mut self, A: &MATA, B: &MATB, α: T, β: T) -> &Self
    where
        MATA: DenseMatrix<T = T>,
        MATB: DenseMatrix<T = T>,
    {
        assert!(A.ncols() == B.nrows() && self.nrows() == A.nrows() && self.ncols() == B.ncols());

        let (m, n) = self.size();
        let k = A.ncols();

        if m == 0 || n == 0 {
            return self;
        }

        for j in 0..n {
            for i in 0..m {
                let mut acc = T::zero();
                for p in 0..k {
                    acc += A.get((i, p)) * B.get((p, j));
                }
                // BLAS convention: C is not read when β = 0
                let Cij = &mut self[(i, j)];
                *Cij = if β == T::zero() {
                    α * acc
                } else {
                    α * acc + β * (*Cij)
                };
            }
        }
        self
    }
}

#[test]
fn test_gemm() {
    let (m, n, k) = (2, 4, 3);
    let a = vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0];
    let b = vec![
        1.0, 5.0, 9.0, 2.0, 6.0, 10.0, 3.0, 7.0, 11.0, 4.0, 8.0, 12.0,
    ];
    let c = vec![2.0, 7.0, 6.0, 2.0, 0.0, 7.0, 4.0, 2.0];

    let mut A = Matrix::zeros((m, k));
    let mut B = Matrix::zeros((k, n));
    let mut C = Matrix::<f64>::zeros((m, n));
    A.copy_from_slice(&a);
    B.copy_from_slice(&b);
    C.copy_from_slice(&c);
    C.mul(&A, &B, 1.0, 1.0);

    assert!(C.data() == vec![40.0, 90.0, 50.0, 100.0, 50.0, 120.0, 60.0, 130.0]);

    // new from slice and transposed multiply
    let A = Matrix::new_from_slice((m, k), &a);
    let B = Matrix::new_from_slice((k, n), &b);
    let mut C = Matrix::<f64>::zeros((n, m));
    C.mul(&B.t(), &A.t(), 1.0, 0.0);

    assert!(C.data() == vec![38.0, 44.0, 50.0, 56.0, 83.0, 98.0, 113.0, 128.0]);
}

#[test]
fn test_gemm_complex_adjoint() {
    use num_complex::Complex64 as C64;

    // A = [1+i  2 ]
    //     [ 0   3i]
    let A = Matrix::from(&[
        [C64::new(1., 1.), C64::new(2., 0.)], //
        [C64::new(0., 0.), C64::new(0., 3.)], //
    ]);

    // A*A^H = [ 6        -6i ]
    //         [ 6i        9  ]
    let mut M = Matrix::<C64>::zeros((2, 2));
    M.mul(&A, &A.t(), C64::new(1., 0.), C64::new(0., 0.));

    let Mtest = Matrix::from(&[
        [C64::new(6., 0.), C64::new(0., -6.)], //
        [C64::new(0., 6.), C64::new(9., 0.)],  //
    ]);
    assert_eq!(M, Mtest);
}

#[test]
fn test_gemm_ignores_nan_when_beta_zero() {
    let A = Matrix::<f64>::identity(2);
    let mut C = Matrix::<f64>::zeros((2, 2));
    C.data_mut().set(f64::NAN);
    C.mul(&A, &A, 1.0, 0.0);
    assert_eq!(C, Matrix::identity(2));
}
