use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Error type returned by sparse matrix assembly operations.
pub enum SparseFormatError {
    /// Matrix dimension fields and/or array lengths are incompatible
    #[error("Matrix dimension fields and/or array lengths are incompatible")]
    IncompatibleDimension,
    /// Data is not sorted by row index within each column
    #[error("Data is not sorted by row index within each column")]
    BadRowOrdering,
    #[error("Row value exceeds the matrix row dimension")]
    /// Row value exceeds the matrix row dimension
    BadRowval,
    #[error("Bad column pointer values")]
    /// Matrix column pointer values are defective
    BadColptr,
}

/// Error type returned by dense factorization and solve routines.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DenseFactorizationError {
    /// The matrix to be factored is not square
    #[error("Matrix must be square, found {rows} x {cols}")]
    NotSquare { rows: usize, cols: usize },
    /// The matrix to be factored has no rows or columns
    #[error("Matrix must have order at least 1")]
    EmptyMatrix,
    /// Right hand side, output or refactored matrix does not
    /// agree with the dimensions of the factorization
    #[error("Incompatible dimensions: expected {expected:?}, found {found:?}")]
    IncompatibleDimension {
        expected: (usize, usize),
        found: (usize, usize),
    },
    /// A non-positive pivot was found.  The value is the (1-based)
    /// order of the leading minor that is not positive definite
    #[error("Matrix is not positive definite (leading minor {0})")]
    NotPositiveDefinite(usize),
    /// Entry `(row, col)` does not match the conjugate of its mirror
    /// entry.  Only reported when Hermitian checks are enabled.
    #[error("Matrix is not Hermitian at entry ({row}, {col})")]
    NotHermitian { row: usize, col: usize },
    /// A sparse input failed its format check
    #[error("Bad sparse matrix input: {0}")]
    SparseFormat(#[from] SparseFormatError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}

#[test]
fn test_error_messages() {
    let e = DenseFactorizationError::NotSquare { rows: 3, cols: 1 };
    assert_eq!(e.to_string(), "Matrix must be square, found 3 x 1");

    let e = DenseFactorizationError::NotPositiveDefinite(4);
    assert_eq!(
        e.to_string(),
        "Matrix is not positive definite (leading minor 4)"
    );

    let e: DenseFactorizationError = SparseFormatError::BadRowval.into();
    assert_eq!(
        e.to_string(),
        "Bad sparse matrix input: Row value exceeds the matrix row dimension"
    );
}
