#![allow(non_snake_case)]
use num_traits::{Float, FloatConst, FromPrimitive, NumAssign};
use std::fmt::{Debug, Display, LowerExp};

/// Main trait for real floating point values.
///
/// Every real-valued quantity in the library (matrix entries of real
/// matrices, magnitudes, tolerances, log determinants) is represented
/// by a type implementing `FloatT`.  Implementations are provided
/// automatically for any type satisfying the bounds, which in practice
/// means `f32` and `f64`.
///
/// `FloatT` relies on [`num_traits`](num_traits) for most of its constituent trait bounds.
pub trait FloatT:
    'static
    + Send
    + Sync
    + Float
    + FloatConst
    + NumAssign
    + Default
    + FromPrimitive
    + Display
    + LowerExp
    + Debug
    + Sized
{
}

impl<T> FloatT for T where
    T: 'static
        + Send
        + Sync
        + Float
        + FloatConst
        + NumAssign
        + Default
        + FromPrimitive
        + Display
        + LowerExp
        + Debug
        + Sized
{
}

/// Trait for converting Rust primitives to [`FloatT`](crate::algebra::FloatT)
///
/// This convenience trait is implemented on f32/64 and u32/64/usize so that
/// constants can be written as `(2.0).as_T()` rather than going through
/// `T::from_f64(2.0).unwrap()` everywhere.
pub trait AsFloatT<T>: 'static {
    fn as_T(&self) -> T;
}

macro_rules! impl_as_FloatT {
    ($ty:ty, $ident:ident) => {
        impl<T> AsFloatT<T> for $ty
        where
            T: FloatT,
        {
            #[inline]
            fn as_T(&self) -> T {
                // every FloatT can represent these primitives, possibly
                // with rounding, so the conversion never returns None
                T::$ident(*self).unwrap_or_else(T::nan)
            }
        }
    };
}
impl_as_FloatT!(u32, from_u32);
impl_as_FloatT!(u64, from_u64);
impl_as_FloatT!(usize, from_usize);
impl_as_FloatT!(f32, from_f32);
impl_as_FloatT!(f64, from_f64);

#[test]
fn test_as_float() {
    let x: f32 = (3usize).as_T();
    assert_eq!(x, 3.0);
    let y: f64 = (0.5f32).as_T();
    assert_eq!(y, 0.5);
}
