// Matrix storage types.   Dense matrices are stored in column
// major format, and sparse matrices in standard compressed sparse
// column format.  Both are generic over the scalar type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sparse matrix in standard Compressed Sparse Column (CSC) format
///
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CscMatrix<T = f64> {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// CSC format column pointer.
    ///
    /// Ths field should have length `n+1`. The last entry corresponds
    /// to the the number of nonzeros and should agree with the lengths
    /// of the `rowval` and `nzval` fields.
    pub colptr: Vec<usize>,
    /// vector of row indices
    pub rowval: Vec<usize>,
    /// vector of non-zero matrix elements
    pub nzval: Vec<T>,
}

/// Matrix orientation marker
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum MatrixShape {
    /// Normal matrix orientation
    N,
    /// Conjugate transposed matrix orientation
    T,
}

/// Read only conjugate transpose view of a matrix
///
/// For real matrices this is the plain transpose.
#[derive(Debug, Clone, Copy)]
pub struct Adjoint<'a, M> {
    /// the matrix being viewed
    pub src: &'a M,
}
