use super::FloatT;
use num_complex::Complex;
use num_traits::NumAssign;
use std::fmt::Debug;
use std::ops::Neg;

/// Field scalars for matrix entries, either real or complex.
///
/// All dense and sparse matrix types and the factorization routines are
/// generic over `ScalarT`.  Implementations are provided for `f32`,
/// `f64`, `Complex<f32>` and `Complex<f64>`.  For real types the
/// conjugate is the identity and the imaginary part is zero, so the same
/// code path computes `L·Lᵗ` for real data and `L·Lᴴ` for complex data.
pub trait ScalarT:
    'static
    + Copy
    + Send
    + Sync
    + Default
    + Debug
    + PartialEq
    + NumAssign
    + Neg<Output = Self>
    + std::iter::Sum
{
    /// The underlying real type
    type Real: FloatT;

    /// Complex conjugate
    fn conj(self) -> Self;

    /// Real part
    fn re(self) -> Self::Real;

    /// Imaginary part (zero for real types)
    fn im(self) -> Self::Real;

    /// Squared magnitude `x·conj(x)`
    fn abs2(self) -> Self::Real;

    /// Magnitude `|x|`
    fn modulus(self) -> Self::Real;

    /// Principal square root
    fn sqrt(self) -> Self;

    /// Embed a real value, with zero imaginary part
    fn from_real(re: Self::Real) -> Self;

    /// True if neither part is NaN or infinite
    fn is_finite(self) -> bool;
}

macro_rules! impl_scalar_real {
    ($T:ty) => {
        impl ScalarT for $T {
            type Real = $T;

            #[inline]
            fn conj(self) -> Self {
                self
            }
            #[inline]
            fn re(self) -> $T {
                self
            }
            #[inline]
            fn im(self) -> $T {
                0.0
            }
            #[inline]
            fn abs2(self) -> $T {
                self * self
            }
            #[inline]
            fn modulus(self) -> $T {
                <$T>::abs(self)
            }
            #[inline]
            fn sqrt(self) -> Self {
                <$T>::sqrt(self)
            }
            #[inline]
            fn from_real(re: $T) -> Self {
                re
            }
            #[inline]
            fn is_finite(self) -> bool {
                <$T>::is_finite(self)
            }
        }
    };
}
impl_scalar_real!(f32);
impl_scalar_real!(f64);

macro_rules! impl_scalar_complex {
    ($T:ty) => {
        impl ScalarT for Complex<$T> {
            type Real = $T;

            #[inline]
            fn conj(self) -> Self {
                Complex::conj(&self)
            }
            #[inline]
            fn re(self) -> $T {
                self.re
            }
            #[inline]
            fn im(self) -> $T {
                self.im
            }
            #[inline]
            fn abs2(self) -> $T {
                Complex::norm_sqr(&self)
            }
            #[inline]
            fn modulus(self) -> $T {
                Complex::norm(self)
            }
            #[inline]
            fn sqrt(self) -> Self {
                Complex::sqrt(self)
            }
            #[inline]
            fn from_real(re: $T) -> Self {
                Complex::new(re, 0.0)
            }
            #[inline]
            fn is_finite(self) -> bool {
                Complex::is_finite(self)
            }
        }
    };
}
impl_scalar_complex!(f32);
impl_scalar_complex!(f64);

#[cfg(test)]
mod test {
    use super::*;
    use num_complex::{Complex32, Complex64};

    #[test]
    fn test_real_scalar() {
        let x = -3.0_f64;
        assert_eq!(ScalarT::conj(x), -3.0);
        assert_eq!(x.abs2(), 9.0);
        assert_eq!(x.modulus(), 3.0);
        assert_eq!(ScalarT::im(x), 0.0);
        assert_eq!(ScalarT::sqrt(4.0_f32), 2.0);
    }

    #[test]
    fn test_complex_scalar() {
        let z = Complex64::new(3.0, -4.0);
        assert_eq!(ScalarT::conj(z), Complex64::new(3.0, 4.0));
        assert_eq!(z.abs2(), 25.0);
        assert_eq!(z.modulus(), 5.0);
        assert_eq!(<Complex64 as ScalarT>::from_real(2.0), Complex64::new(2.0, 0.0));

        // principal root of -4 is 2i
        let r = ScalarT::sqrt(Complex32::new(-4.0, 0.0));
        assert!((r - Complex32::new(0.0, 2.0)).norm() < 1e-6);

        assert!(!ScalarT::is_finite(Complex64::new(f64::NAN, 0.0)));
        assert!(!ScalarT::is_finite(Complex64::new(0.0, f64::INFINITY)));
    }
}
