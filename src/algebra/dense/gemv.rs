#![allow(non_snake_case)]

use crate::algebra::*;

impl<S, T> MultiplyGEMV for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
    T: ScalarT,
{
    type T = T;
    // implements y = αA*x + βy
    fn gemv(&self, x: &[T], y: &mut [T], α: T, β: T) {
        let (m, n) = self.size();
        assert!(n == x.len() && m == y.len());

        _scale_or_zero(y, β);
        for (col, &xj) in x.iter().enumerate() {
            let a = α * xj;
            if a == T::zero() {
                continue;
            }
            for (yi, &Aij) in y.iter_mut().zip(self.col_slice(col)) {
                *yi += Aij * a;
            }
        }
    }
}

impl<S, T> MultiplyGEMV for Adjoint<'_, DenseStorageMatrix<S, T>>
where
    S: AsRef<[T]>,
    T: ScalarT,
{
    type T = T;
    // implements y = αA'*x + βy
    fn gemv(&self, x: &[T], y: &mut [T], α: T, β: T) {
        let (m, n) = self.src.size(); //NB: size of A, not A'
        assert!(m == x.len() && n == y.len());

        _scale_or_zero(y, β);
        for (col, yj) in y.iter_mut().enumerate() {
            // column of A dotted with x, conjugating A
            *yj += α * self.src.col_slice(col).dot(x);
        }
    }
}

// y = βy, but without reading y when β = 0
fn _scale_or_zero<T: ScalarT>(y: &mut [T], β: T) {
    if β == T::zero() {
        y.set(T::zero());
    } else {
        y.scale(β);
    }
}

#[test]
fn test_gemv() {
    let (m, n) = (2, 3);
    let a = vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0];
    let A = Matrix::new_from_slice((m, n), &a);

    let x = vec![1., 2., 3.];
    let mut y = vec![-1., -2.];
    A.gemv(&x, &mut y, 2.0, 3.0);
    assert!(y == [25.0, 58.0]);

    let x = vec![1., 2.];
    let mut y = vec![-1., -2., -3.];
    A.t().gemv(&x, &mut y, 2.0, 3.0);
    assert!(y == [15.0, 18.0, 21.0]);
}

#[test]
fn test_gemv_complex_adjoint() {
    use num_complex::Complex64 as C64;

    let A = Matrix::from(&[
        [C64::new(1., 1.), C64::new(2., 0.)], //
        [C64::new(0., 0.), C64::new(0., 3.)], //
    ]);
    let x = vec![C64::new(1., 0.), C64::new(0., 1.)];
    let mut y = vec![C64::new(0., 0.); 2];

    // A^H*x = [1-i  0 ] [1]   [1-i]
    //         [ 2  -3i] [i] = [ 5 ]
    A.t().gemv(&x, &mut y, C64::new(1., 0.), C64::new(0., 0.));
    assert_eq!(y, vec![C64::new(1., -1.), C64::new(5., 0.)]);
}
