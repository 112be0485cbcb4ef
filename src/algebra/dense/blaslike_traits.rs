#![allow(non_snake_case)]
use crate::algebra::{DenseMatrix, DenseStorageMatrix};

/// General matrix-matrix multiply
pub trait MultiplyGEMM {
    type T;
    /// BLAS-like general matrix-matrix multiply.  Produces `self = α*A*B + β*self`
    ///
    /// Either operand may be an [`Adjoint`](crate::algebra::Adjoint) view.
    ///
    /// # Panics
    /// Panics if the dimensions of `A`, `B` and `self` are incompatible.
    fn mul<MATA, MATB>(&mut self, A: &MATA, B: &MATB, α: Self::T, β: Self::T) -> &Self
    where
        MATA: DenseMatrix<T = Self::T>,
        MATB: DenseMatrix<T = Self::T>;
}

/// General matrix-vector multiply
pub trait MultiplyGEMV {
    type T;
    /// BLAS-like general matrix-vector multiply.  Produces `y = α*self*x + β*y`
    ///
    /// # Panics
    /// Panics if the dimensions of `self`, `x` and `y` are incompatible.
    fn gemv(&self, x: &[Self::T], y: &mut [Self::T], α: Self::T, β: Self::T);
}

// Triangular solves with multiple right hand sides.  Only the
// lower triangle of self is referenced, and B is overwritten
// with the solution X.
pub(crate) trait SolveTriangular {
    type T;
    // solves L*X = B
    fn trsm_lower<S>(&self, B: &mut DenseStorageMatrix<S, Self::T>)
    where
        S: AsMut<[Self::T]> + AsRef<[Self::T]>;

    // solves L^H*X = B
    fn trsm_lower_adjoint<S>(&self, B: &mut DenseStorageMatrix<S, Self::T>)
    where
        S: AsMut<[Self::T]> + AsRef<[Self::T]>;
}
