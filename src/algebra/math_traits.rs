use super::ScalarT;

// All internal vector math for the matrix and factorization
// types goes through this trait, which is implemented generically
// on slices of real or complex scalars.

/// Vector operations on slices of [`ScalarT`](crate::algebra::ScalarT)
pub trait VectorMath {
    type T: ScalarT;

    /// Copy values from `src` to `self`
    fn copy_from(&mut self, src: &Self) -> &mut Self;

    /// Apply an elementwise operation on a vector.
    fn scalarop(&mut self, op: impl Fn(Self::T) -> Self::T) -> &mut Self;

    /// set all elements to the same value
    fn set(&mut self, c: Self::T) -> &mut Self;

    /// Elementwise scaling.
    fn scale(&mut self, c: Self::T) -> &mut Self;

    /// Elementwise negation of entries.
    fn negate(&mut self) -> &mut Self;

    /// Elementwise complex conjugation.  Does nothing for real types.
    fn conjugate(&mut self) -> &mut Self;

    /// Dot product `Σ conj(self[i]) * y[i]`
    fn dot(&self, y: &Self) -> Self::T;

    /// Sum of elements.
    fn sum(&self) -> Self::T;

    /// Sum of squared magnitudes of the elements.
    fn sumsq(&self) -> <Self::T as ScalarT>::Real;

    /// 2-norm
    fn norm(&self) -> <Self::T as ScalarT>::Real;

    /// Infinity norm
    fn norm_inf(&self) -> <Self::T as ScalarT>::Real;

    /// One norm
    fn norm_one(&self) -> <Self::T as ScalarT>::Real;

    /// Largest elementwise magnitude of `self - b`
    fn norm_inf_diff(&self, b: &Self) -> <Self::T as ScalarT>::Real;

    /// Checks if all elements are finite, i.e. no Infs or NaNs
    fn is_finite(&self) -> bool;

    //blas-like vector ops
    //--------------------

    /// BLAS-like shift and scale in place.  Produces `self = a*x+b*self`
    fn axpby(&mut self, a: Self::T, x: &Self, b: Self::T) -> &mut Self;

    /// BLAS-like shift and scale, non in-place version.  Produces `self = a*x+b*y`
    fn waxpby(&mut self, a: Self::T, x: &Self, b: Self::T, y: &Self) -> &mut Self;
}
