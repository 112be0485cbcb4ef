#![allow(dead_code)]
#![allow(non_snake_case)]

// shared helpers for generating random test problems

use numerica::algebra::*;
use num_complex::{Complex32, Complex64};
use num_traits::FromPrimitive;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait RandomScalar: ScalarT {
    /// entries with real and imaginary parts uniform on [-1,1)
    fn random(rng: &mut StdRng) -> Self;
}

impl RandomScalar for f32 {
    fn random(rng: &mut StdRng) -> Self {
        rng.gen_range(-1.0..1.0)
    }
}

impl RandomScalar for f64 {
    fn random(rng: &mut StdRng) -> Self {
        rng.gen_range(-1.0..1.0)
    }
}

impl RandomScalar for Complex32 {
    fn random(rng: &mut StdRng) -> Self {
        Complex32::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0))
    }
}

impl RandomScalar for Complex64 {
    fn random(rng: &mut StdRng) -> Self {
        Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0))
    }
}

pub fn test_rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

pub fn random_vector<T: RandomScalar>(rng: &mut StdRng, n: usize) -> Vec<T> {
    (0..n).map(|_| T::random(rng)).collect()
}

pub fn random_matrix<T: RandomScalar>(rng: &mut StdRng, size: (usize, usize)) -> Matrix<T> {
    Matrix::from_fn(size, |_, _| T::random(rng))
}

/// A = M*M^H + n*I for random M, which is Hermitian positive definite
pub fn random_hpd<T: RandomScalar>(rng: &mut StdRng, n: usize) -> Matrix<T> {
    let M = random_matrix::<T>(rng, (n, n));
    let shift = T::from_real(T::Real::from_usize(n).unwrap());
    let mut A = Matrix::identity(n);
    A.mul(&M, &M.t(), T::one(), shift);
    A
}

/// largest entry of |A*x - b|
pub fn residual<T: ScalarT>(A: &Matrix<T>, x: &[T], b: &[T]) -> T::Real {
    let mut r = b.to_vec();
    A.gemv(x, &mut r, T::one(), -T::one());
    r.norm_inf()
}

/// largest entry of |A*X - B|
pub fn residual_matrix<T: ScalarT>(A: &Matrix<T>, X: &Matrix<T>, B: &Matrix<T>) -> T::Real {
    let mut R = B.clone();
    R.mul(A, X, T::one(), -T::one());
    R.data().norm_inf()
}
