#![allow(non_snake_case)]

use crate::algebra::*;
use std::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dense matrix type for owned and borrowed matrices
///
/// Data is stored in column major format.   The owned version of this
/// type is [`Matrix`](crate::algebra::Matrix).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
{
    /// dimensions
    pub(crate) size: (usize, usize),
    /// vector of data in column major format
    pub(crate) data: S,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) phantom: std::marker::PhantomData<T>,
}

/// Owned dense matrix in column major format
pub type Matrix<T = f64> = DenseStorageMatrix<Vec<T>, T>;
pub(crate) type BorrowedMatrixMut<'a, T> = DenseStorageMatrix<&'a mut [T], T>;

impl<S, T> ShapedMatrix for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
{
    fn nrows(&self) -> usize {
        self.size.0
    }
    fn ncols(&self) -> usize {
        self.size.1
    }
    fn size(&self) -> (usize, usize) {
        self.size
    }
    fn shape(&self) -> MatrixShape {
        MatrixShape::N
    }
}

//NB: the concrete dense type is just called "Matrix".  The "DenseMatrix" trait
//is implemented on Matrix, Adjoint and borrowed matrix types to allow for
//reading values in any of those formats.   This follows the Julia naming
//convention for similar types.

/// Read access to dense matrices and views of them
pub trait DenseMatrix: ShapedMatrix {
    type T: ScalarT;

    /// position of the entry `(row, col)` in the underlying data
    fn index_linear(&self, idx: (usize, usize)) -> usize;

    /// the underlying column major data
    fn data(&self) -> &[Self::T];

    /// the value at `(row, col)`, conjugated for adjoint views
    fn get(&self, idx: (usize, usize)) -> Self::T;
}

/// Write access to dense matrices
pub trait DenseMatrixMut: DenseMatrix {
    /// the underlying column major data
    fn data_mut(&mut self) -> &mut [Self::T];
}

impl<S, T> DenseMatrix for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
    T: ScalarT,
{
    type T = T;

    #[inline]
    fn index_linear(&self, idx: (usize, usize)) -> usize {
        idx.0 + self.nrows() * idx.1
    }
    fn data(&self) -> &[T] {
        self.data.as_ref()
    }
    #[inline]
    fn get(&self, idx: (usize, usize)) -> T {
        self.data()[self.index_linear(idx)]
    }
}

impl<S, T> DenseMatrixMut for DenseStorageMatrix<S, T>
where
    S: AsMut<[T]> + AsRef<[T]>,
    T: ScalarT,
{
    fn data_mut(&mut self) -> &mut [T] {
        self.data.as_mut()
    }
}

impl<S, T> Index<(usize, usize)> for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
    T: ScalarT,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &T {
        let lidx = self.index_linear(idx);
        &self.data()[lidx]
    }
}

impl<S, T> IndexMut<(usize, usize)> for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]> + AsMut<[T]>,
    T: ScalarT,
{
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        let lidx = self.index_linear(idx);
        &mut self.data_mut()[lidx]
    }
}

impl<S, T> DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
    T: ScalarT,
{
    /// Column `col` as a slice
    ///
    /// # Panics
    /// Panics if `col` is out of bounds.
    pub fn col_slice(&self, col: usize) -> &[T] {
        let (m, n) = self.size;
        assert!(col < n);
        &self.data()[(col * m)..(col + 1) * m]
    }

    /// Conjugate transpose view.   No data is copied.
    pub fn t(&self) -> Adjoint<'_, Self> {
        Adjoint { src: self }
    }

    /// True if all entries above the diagonal are zero
    pub fn is_tril(&self) -> bool {
        for c in 0..self.ncols() {
            for r in 0..c.min(self.nrows()) {
                if self[(r, c)] != T::zero() {
                    return false;
                }
            }
        }
        true
    }
}

impl<S, T> DenseStorageMatrix<S, T>
where
    S: AsMut<[T]> + AsRef<[T]>,
    T: ScalarT,
{
    /// Column `col` as a mutable slice
    ///
    /// # Panics
    /// Panics if `col` is out of bounds.
    pub fn col_slice_mut(&mut self, col: usize) -> &mut [T] {
        let (m, n) = self.size;
        assert!(col < n);
        &mut self.data_mut()[(col * m)..(col + 1) * m]
    }
}

// ------------------------------------------------
// Adjoint implementation for DenseMatrix.  This is a read
// only view of the matrix that allows for things like matrix
// multiplication and element reads, but does not allow
// for modification of the underlying data.

impl<S, T> DenseMatrix for Adjoint<'_, DenseStorageMatrix<S, T>>
where
    S: AsRef<[T]>,
    T: ScalarT,
{
    type T = T;

    #[inline]
    fn index_linear(&self, idx: (usize, usize)) -> usize {
        //reverse the indices
        self.src.index_linear((idx.1, idx.0))
    }
    fn data(&self) -> &[T] {
        self.src.data()
    }
    #[inline]
    fn get(&self, idx: (usize, usize)) -> T {
        self.data()[self.index_linear(idx)].conj()
    }
}

// ------------------------------------------------
// borrowed mutable matrices, used to treat a single
// vector as a one column matrix

impl<'a, T> BorrowedMatrixMut<'a, T>
where
    T: ScalarT,
{
    pub(crate) fn from_slice_mut(data: &'a mut [T], m: usize, n: usize) -> Self {
        assert_eq!(data.len(), m * n);
        Self {
            size: (m, n),
            data,
            phantom: std::marker::PhantomData::<T>,
        }
    }
}
