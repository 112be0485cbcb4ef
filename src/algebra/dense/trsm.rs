#![allow(non_snake_case)]

use crate::algebra::*;

// Native triangular solves against the lower triangle of a square
// dense matrix.  Entries above the diagonal are never read.

impl<T> SolveTriangular for Matrix<T>
where
    T: ScalarT,
{
    type T = T;

    fn trsm_lower<S>(&self, B: &mut DenseStorageMatrix<S, T>)
    where
        S: AsMut<[T]> + AsRef<[T]>,
    {
        let n = self.nrows();
        assert!(self.is_square() && B.nrows() == n);

        for c in 0..B.ncols() {
            let x = B.col_slice_mut(c);
            // column oriented forward substitution
            for j in 0..n {
                let Lj = self.col_slice(j);
                x[j] /= Lj[j];
                let xj = x[j];
                for (xi, &Lij) in x[(j + 1)..].iter_mut().zip(&Lj[(j + 1)..]) {
                    *xi -= Lij * xj;
                }
            }
        }
    }

    fn trsm_lower_adjoint<S>(&self, B: &mut DenseStorageMatrix<S, T>)
    where
        S: AsMut<[T]> + AsRef<[T]>,
    {
        let n = self.nrows();
        assert!(self.is_square() && B.nrows() == n);

        for c in 0..B.ncols() {
            let x = B.col_slice_mut(c);
            // row i of L^H is the conjugate of column i of L
            for i in (0..n).rev() {
                let Li = self.col_slice(i);
                let s = Li[(i + 1)..].dot(&x[(i + 1)..]);
                x[i] = (x[i] - s) / Li[i].conj();
            }
        }
    }
}
