#![allow(non_snake_case)]

use crate::algebra::*;

impl<T: ScalarT> MultiplyGEMV for CscMatrix<T> {
    type T = T;

    // implements y = αA*x + βy
    fn gemv(&self, x: &[T], y: &mut [T], α: T, β: T) {
        _csc_axpby_N(self, y, x, α, β);
    }
}

impl<T: ScalarT> MultiplyGEMV for Adjoint<'_, CscMatrix<T>> {
    type T = T;

    // implements y = αA'*x + βy
    fn gemv(&self, x: &[T], y: &mut [T], α: T, β: T) {
        _csc_axpby_T(self.src, y, x, α, β);
    }
}

// y = βy, but without reading y when β = 0
fn _csc_scale_y<T: ScalarT>(y: &mut [T], b: T) {
    if b == T::zero() {
        y.set(T::zero());
    } else if b == T::one() {
    } else if b == -T::one() {
        y.negate();
    } else {
        y.scale(b);
    }
}

// sparse matrix-vector multiply, no transpose
fn _csc_axpby_N<T: ScalarT>(A: &CscMatrix<T>, y: &mut [T], x: &[T], a: T, b: T) {
    assert_eq!(A.nzval.len(), A.colptr[A.n]);
    assert_eq!(x.len(), A.n);
    assert_eq!(y.len(), A.m);

    _csc_scale_y(y, b);

    // if a is zero, we're done
    if a == T::zero() {
        return;
    }

    //y += A*x
    for (j, &xj) in x.iter().enumerate() {
        let axj = a * xj;
        for i in A.colptr[j]..A.colptr[j + 1] {
            y[A.rowval[i]] += A.nzval[i] * axj;
        }
    }
}

// sparse matrix-vector multiply, conjugate transposed
fn _csc_axpby_T<T: ScalarT>(A: &CscMatrix<T>, y: &mut [T], x: &[T], a: T, b: T) {
    assert_eq!(A.nzval.len(), A.colptr[A.n]);
    assert_eq!(x.len(), A.m);
    assert_eq!(y.len(), A.n);

    _csc_scale_y(y, b);

    if a == T::zero() {
        return;
    }

    for (j, yj) in y.iter_mut().enumerate() {
        let mut acc = T::zero();
        for k in A.colptr[j]..A.colptr[j + 1] {
            acc += A.nzval[k].conj() * x[A.rowval[k]];
        }
        *yj += a * acc;
    }
}
