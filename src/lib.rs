//! __numerica__ is a dense linear algebra library for Hermitian positive
//! definite systems, implemented natively in Rust.
//!
//! The central type is [`Cholesky`](crate::algebra::Cholesky), which computes
//! the factorization
//!
//! $$
//! A = L L^H
//! $$
//!
//! of a Hermitian positive definite matrix $A$, with $L$ lower triangular
//! with a real, positive diagonal.  Once computed, the factorization is used
//! to solve linear systems $Ax = b$ and $AX = B$, and to compute the
//! determinant, log determinant and inverse of $A$.
//!
//! ## Features
//!
//! * __Generic__: all matrix types and factorizations are generic over real
//! (`f32`, `f64`) and complex (`Complex<f32>`, `Complex<f64>`) scalars.
//!
//! * __Dense and sparse inputs__: factorizations accept dense column major
//! matrices, conjugate transposed views of them, or sparse matrices in
//! compressed sparse column format.
//!
//! * __Allocation control__: every solve has allocating, caller-supplied
//! output and in-place variants.
//!
//! ## Example
//!
//! ```
//! use numerica::algebra::*;
//!
//! let A = Matrix::<f64>::from(&[
//!     [ 4., -2.,  0.],
//!     [-2.,  5.,  1.],
//!     [ 0.,  1.,  3.],
//! ]);
//! let b = [2., 1., 4.];
//!
//! let chol = A.cholesky().unwrap();
//! let x = chol.solve(&b).unwrap();
//!
//! let mut r = b.to_vec();
//! A.gemv(&x, &mut r, 1., -1.);
//! assert!(r.norm_inf() < 1e-12);
//! ```
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

//Rust hates greek characters
#![allow(confusable_idents)]

pub mod algebra;
