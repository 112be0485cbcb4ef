//! __numerica__ dense and sparse linear algebra.
//!
//! This module provides the matrix types, the scalar traits over which they
//! are generic, and a dense Cholesky factorization with solvers for
//! Hermitian positive definite systems.  All types are generic over
//! [`ScalarT`], which is implemented for `f32`, `f64`, `Complex<f32>` and
//! `Complex<f64>`.
//!
//! Every computational path is implemented natively in Rust.

// first import and flatten the collection of core
// numeric types and matrix / vector traits.

mod error_types;
mod floats;
mod math_traits;
mod matrix_traits;
mod matrix_types;
mod scalar;
pub use error_types::*;
pub use floats::*;
pub use math_traits::*;
pub use matrix_traits::*;
pub use matrix_types::*;
pub use scalar::*;

mod adjoint;
mod vecmath;

// matrix implementations
mod csc;
mod dense;
pub use dense::*;
