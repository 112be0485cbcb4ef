#![allow(non_snake_case)]

use crate::algebra::*;

impl<T> Matrix<T>
where
    T: ScalarT,
{
    /// Matrix of zeros with dimension `size = (m, n)`
    pub fn zeros(size: (usize, usize)) -> Self {
        let (m, n) = size;
        let data = vec![T::zero(); m * n];
        Self {
            size,
            data,
            phantom: std::marker::PhantomData::<T>,
        }
    }

    /// Identity matrix of order `n`
    pub fn identity(n: usize) -> Self {
        let mut mat = Matrix::zeros((n, n));
        mat.set_identity();
        mat
    }

    /// Overwrite a square matrix with the identity
    ///
    /// # Panics
    /// Panics if the matrix is not square.
    pub fn set_identity(&mut self) {
        assert!(self.is_square());
        self.data_mut().set(T::zero());
        for i in 0..self.ncols() {
            self[(i, i)] = T::one();
        }
    }

    /// Matrix with entries `f(row, col)`
    pub fn from_fn(size: (usize, usize), mut f: impl FnMut(usize, usize) -> T) -> Self {
        let (m, n) = size;
        let mut data = Vec::with_capacity(m * n);
        for col in 0..n {
            for row in 0..m {
                data.push(f(row, col));
            }
        }
        Self {
            size,
            data,
            phantom: std::marker::PhantomData::<T>,
        }
    }

    /// Matrix with dimension `size = (m, n)` from column major data
    ///
    /// # Panics
    /// Panics if the data length is not `m*n`.
    pub fn new_from_slice(size: (usize, usize), src: &[T]) -> Self {
        let (m, n) = size;
        assert!(m * n == src.len());
        Self {
            size,
            data: src.to_vec(),
            phantom: std::marker::PhantomData::<T>,
        }
    }

    /// Overwrite all data with column major values from `src`
    pub fn copy_from_slice(&mut self, src: &[T]) -> &mut Self {
        self.data.copy_from_slice(src);
        self
    }

    /// Owned copy of the conjugate transpose
    pub fn adjoint(&self) -> Self {
        let (m, n) = self.size();
        let At = self.t();
        Matrix::from_fn((n, m), |i, j| At.get((i, j)))
    }

    /// Consume the matrix and return its column major data
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<const M: usize, const N: usize, T> From<&[[T; N]; M]> for Matrix<T>
where
    T: ScalarT,
{
    // row major input, so that literals read like the matrix they define
    fn from(rows: &[[T; N]; M]) -> Self {
        Matrix::from_fn((M, N), |i, j| rows[i][j])
    }
}

impl<T> std::fmt::Display for Matrix<T>
where
    T: ScalarT,
{
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f)?;
        for i in 0..self.nrows() {
            write!(f, "[ ")?;
            for j in 0..self.ncols() {
                write!(f, " {:?}", self[(i, j)])?;
            }
            writeln!(f, "]")?;
        }
        writeln!(f)?;
        Ok(())
    }
}
