#![allow(non_snake_case)]

use crate::algebra::*;
use num_traits::{Float, One, Zero};

/// Cholesky factorization of a Hermitian positive definite matrix.
///
/// Computes the lower triangular factor `L` such that `A = L*L^H`
/// (`A = L*L^T` for real matrices).  The factor is computed once when the
/// factorization is constructed and is read only afterwards, so a completed
/// factorization can be shared freely between threads.
///
/// Only the lower triangle of the input is referenced.  Unless a Hermitian
/// check is requested through [`CholeskySettings`], an asymmetric input is
/// factored as if its upper triangle were the conjugate of its lower one.
///
/// __Example usage__ : To solve `Ax = b`
///
/// ```
/// use numerica::algebra::*;
///
/// let A = Matrix::<f64>::from(&[
///     [ 4., 2.],
///     [ 2., 3.],
/// ]);
///
/// let chol = Cholesky::new(&A).unwrap();
/// let x = chol.solve(&[8., 7.]).unwrap();
///
/// assert!(x.norm_inf_diff(&[1.25, 1.5]) < 1e-12);
/// assert!((chol.determinant() - 8.).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Cholesky<T: ScalarT> {
    /// lower triangular factor (stored as square dense)
    L: Matrix<T>,
}

impl<T> Cholesky<T>
where
    T: ScalarT,
{
    /// Factor the square matrix `A`.  `A` is not modified.
    ///
    /// # Errors
    /// Returns [`NotSquare`](DenseFactorizationError::NotSquare) or
    /// [`EmptyMatrix`](DenseFactorizationError::EmptyMatrix) for inputs of
    /// the wrong shape, and
    /// [`NotPositiveDefinite`](DenseFactorizationError::NotPositiveDefinite)
    /// if a non-positive pivot is found.
    pub fn new<M>(A: &M) -> Result<Self, DenseFactorizationError>
    where
        M: DenseMatrix<T = T>,
    {
        Self::new_with_settings(A, &CholeskySettings::default())
    }

    /// Factor the square matrix `A` using the given settings.
    ///
    /// # Errors
    /// As for [`new`](Cholesky::new), and additionally
    /// [`NotHermitian`](DenseFactorizationError::NotHermitian) if
    /// `settings.hermitian_check` is enabled and `A` fails the check.
    pub fn new_with_settings<M>(
        A: &M,
        settings: &CholeskySettings<T::Real>,
    ) -> Result<Self, DenseFactorizationError>
    where
        M: DenseMatrix<T = T>,
    {
        check_square(A)?;
        let n = A.nrows();
        let mut L = Matrix::<T>::zeros((n, n));
        factor_into(&mut L, A, settings)?;
        Ok(Self { L })
    }

    /// Factor a new matrix of the same order, reusing the storage of
    /// this factorization.  The existing factorization is consumed, so
    /// nothing usable remains if the new factorization fails.
    ///
    /// # Errors
    /// As for [`new`](Cholesky::new), and additionally
    /// [`IncompatibleDimension`](DenseFactorizationError::IncompatibleDimension)
    /// if `A` is square but of a different order.
    pub fn refactor<M>(self, A: &M) -> Result<Self, DenseFactorizationError>
    where
        M: DenseMatrix<T = T>,
    {
        self.refactor_with_settings(A, &CholeskySettings::default())
    }

    /// As [`refactor`](Cholesky::refactor), using the given settings.
    pub fn refactor_with_settings<M>(
        mut self,
        A: &M,
        settings: &CholeskySettings<T::Real>,
    ) -> Result<Self, DenseFactorizationError>
    where
        M: DenseMatrix<T = T>,
    {
        check_square(A)?;
        if A.size() != self.L.size() {
            return Err(DenseFactorizationError::IncompatibleDimension {
                expected: self.L.size(),
                found: A.size(),
            });
        }
        factor_into(&mut self.L, A, settings)?;
        Ok(self)
    }

    /// The lower triangular factor `L`
    pub fn factor(&self) -> &Matrix<T> {
        &self.L
    }

    /// Order of the factored matrix
    pub fn order(&self) -> usize {
        self.L.nrows()
    }

    /// Determinant of the factored matrix, computed as the product of
    /// `L[i,i]*conj(L[i,i])`.  The imaginary part is zero for complex types.
    pub fn determinant(&self) -> T {
        let mut det = T::Real::one();
        for i in 0..self.order() {
            det *= self.L[(i, i)].abs2();
        }
        T::from_real(det)
    }

    /// Natural log of the determinant of the factored matrix.  This avoids
    /// the overflow or underflow that [`determinant`](Cholesky::determinant)
    /// can suffer for large matrices.
    pub fn determinant_ln(&self) -> T::Real {
        let mut ld = T::Real::zero();
        for i in 0..self.order() {
            ld += self.L[(i, i)].modulus().ln();
        }
        ld + ld
    }

    /// Solve `Ax = b`, returning `x` as a new vector.
    pub fn solve(&self, b: &[T]) -> Result<Vec<T>, DenseFactorizationError> {
        let mut x = b.to_vec();
        self.solve_in_place(&mut x)?;
        Ok(x)
    }

    /// Solve `Ax = b`, writing the solution into `x`.  `b` is not modified.
    pub fn solve_into(&self, b: &[T], x: &mut [T]) -> Result<(), DenseFactorizationError> {
        self.check_rhs((b.len(), 1))?;
        if x.len() != b.len() {
            return Err(DenseFactorizationError::IncompatibleDimension {
                expected: (b.len(), 1),
                found: (x.len(), 1),
            });
        }
        x.copy_from(b);
        self.solve_in_place(x)
    }

    /// Solve `Ax = b`, overwriting `b` with the solution.
    pub fn solve_in_place(&self, b: &mut [T]) -> Result<(), DenseFactorizationError> {
        let n = b.len();
        let mut B = BorrowedMatrixMut::from_slice_mut(b, n, 1);
        self.solve_matrix_in_place(&mut B)
    }

    /// Solve `AX = B` for a right hand side with (possibly) multiple
    /// columns, returning `X` as a new matrix.
    pub fn solve_matrix(&self, B: &Matrix<T>) -> Result<Matrix<T>, DenseFactorizationError> {
        let mut X = B.clone();
        self.solve_matrix_in_place(&mut X)?;
        Ok(X)
    }

    /// Solve `AX = B`, writing the solution into `X`.  `B` is not modified.
    pub fn solve_matrix_into(
        &self,
        B: &Matrix<T>,
        X: &mut Matrix<T>,
    ) -> Result<(), DenseFactorizationError> {
        self.check_rhs(B.size())?;
        if X.size() != B.size() {
            return Err(DenseFactorizationError::IncompatibleDimension {
                expected: B.size(),
                found: X.size(),
            });
        }
        X.copy_from_slice(B.data());
        self.solve_matrix_in_place(X)
    }

    /// Solve `AX = B`, overwriting `B` with the solution `X`.
    pub fn solve_matrix_in_place<S>(
        &self,
        B: &mut DenseStorageMatrix<S, T>,
    ) -> Result<(), DenseFactorizationError>
    where
        S: AsMut<[T]> + AsRef<[T]>,
    {
        self.check_rhs(B.size())?;

        // forward solve L*Y = B, then backward solve L^H*X = Y
        self.L.trsm_lower(B);
        self.L.trsm_lower_adjoint(B);
        Ok(())
    }

    /// Inverse of the factored matrix
    pub fn inverse(&self) -> Matrix<T> {
        let mut X = Matrix::identity(self.order());
        self.L.trsm_lower(&mut X);
        self.L.trsm_lower_adjoint(&mut X);
        X
    }

    fn check_rhs(&self, size: (usize, usize)) -> Result<(), DenseFactorizationError> {
        if size.0 != self.order() {
            return Err(DenseFactorizationError::IncompatibleDimension {
                expected: (self.order(), size.1),
                found: size,
            });
        }
        Ok(())
    }
}

impl<T> Matrix<T>
where
    T: ScalarT,
{
    /// Cholesky factorization of this matrix.  See [`Cholesky::new`].
    pub fn cholesky(&self) -> Result<Cholesky<T>, DenseFactorizationError> {
        Cholesky::new(self)
    }
}

fn check_square<M: ShapedMatrix>(A: &M) -> Result<(), DenseFactorizationError> {
    let (rows, cols) = A.size();
    if rows != cols {
        log::debug!("cholesky: input is {} x {}, not square", rows, cols);
        return Err(DenseFactorizationError::NotSquare { rows, cols });
    }
    if rows == 0 {
        log::debug!("cholesky: input is empty");
        return Err(DenseFactorizationError::EmptyMatrix);
    }
    Ok(())
}

// Cholesky-Banachiewicz recurrence, reading only the lower
// triangle of A and writing every entry of L.  L must be square
// and of the same order as A.
fn factor_into<M, T>(
    L: &mut Matrix<T>,
    A: &M,
    settings: &CholeskySettings<T::Real>,
) -> Result<(), DenseFactorizationError>
where
    M: DenseMatrix<T = T>,
    T: ScalarT,
{
    let n = A.nrows();
    debug_assert!(L.size() == (n, n));

    if settings.hermitian_check {
        check_hermitian(A, settings.hermitian_tol)?;
    }

    L.data_mut().set(T::zero());

    for j in 0..n {
        // d = A[j,j] - Σ_{k<j} |L[j,k]|²
        let mut s = T::Real::zero();
        for k in 0..j {
            s += L[(j, k)].abs2();
        }
        let d = A.get((j, j)) - T::from_real(s);

        if d.re().is_nan() || d.re() <= T::Real::zero() {
            log::debug!("cholesky: non-positive pivot at leading minor {}", j + 1);
            return Err(DenseFactorizationError::NotPositiveDefinite(j + 1));
        }
        let Ljj = d.sqrt();
        L[(j, j)] = Ljj;

        for i in (j + 1)..n {
            let mut s = T::zero();
            for k in 0..j {
                s += L[(i, k)] * L[(j, k)].conj();
            }
            L[(i, j)] = (A.get((i, j)) - s) / Ljj;
        }
    }

    log::debug!("cholesky: factored matrix of order {}", n);
    Ok(())
}

fn check_hermitian<M, T>(A: &M, tol: T::Real) -> Result<(), DenseFactorizationError>
where
    M: DenseMatrix<T = T>,
    T: ScalarT,
{
    let n = A.nrows();
    for col in 0..n {
        for row in col..n {
            let gap = (A.get((row, col)) - A.get((col, row)).conj()).modulus();
            if gap.is_nan() || gap > tol {
                log::debug!("cholesky: asymmetric entry at ({}, {})", row, col);
                return Err(DenseFactorizationError::NotHermitian { row, col });
            }
        }
    }
    Ok(())
}

macro_rules! generate_test_cholesky {
    ($fxx:ty, $test_name:ident, $tolfn:ident) => {
        #[test]
        fn $test_name() {
            #[rustfmt::skip]
            let S = Matrix::<$fxx>::from(
            &[[ 8., -2., 4.],
            [-2., 12., 2.],
            [ 4.,  2., 6.]]);

            let Scopy = S.clone();

            let chol = Cholesky::<$fxx>::new(&S).unwrap();
            assert_eq!(S, Scopy);
            assert!(chol.factor().is_tril());

            let L = chol.factor();
            let mut M = Matrix::<$fxx>::zeros((3, 3));
            M.mul(L, &L.t(), 1.0, 0.0);

            assert!(M.data().norm_inf_diff(Scopy.data()) < (1e-8 as $fxx).$tolfn());

            // now try to solve with multiple RHS
            let X = Matrix::<$fxx>::from(&[
                [1., 2.], //
                [3., 4.], //
                [5., 6.],
            ]);
            let B = Matrix::<$fxx>::from(&[
                [22., 32.], //
                [44., 56.], //
                [40., 52.],
            ]);

            let Xsolve = chol.solve_matrix(&B).unwrap();
            assert!(Xsolve.data().norm_inf_diff(X.data()) <= (1e-12 as $fxx).$tolfn());
        }
    };
}

generate_test_cholesky!(f32, test_cholesky_f32, sqrt);
generate_test_cholesky!(f64, test_cholesky_f64, abs);

macro_rules! generate_test_cholesky_logdet {
    ($fxx:ty, $test_name:ident, $tolfn:ident) => {
        #[test]
        #[allow(clippy::excessive_precision)]
        fn $test_name() {
            #[rustfmt::skip]
            let S = Matrix::<$fxx>::from(
            &[[ 8., -2., 4.],
              [-2., 12., 2.],
              [ 4.,  2., 6.]]);

            let chol = Cholesky::<$fxx>::new(&S).unwrap();
            assert!((chol.determinant_ln() - 5.69035945432406).abs() < (1e-10 as $fxx).$tolfn());
            assert!((chol.determinant() - 296.).abs() < (1e-10 as $fxx).$tolfn() * 296.);
        }
    };
}

generate_test_cholesky_logdet!(f32, test_cholesky_logdet_f32, sqrt);
generate_test_cholesky_logdet!(f64, test_cholesky_logdet_f64, abs);
